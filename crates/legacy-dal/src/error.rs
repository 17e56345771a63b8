use legacy_dal_core::CoreError;
use legacy_dal_loader::LoaderError;
use legacy_dal_parser::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Connection(#[from] CoreError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Source(#[from] LoaderError),
}
