//! Helpers to turn parsed `TableDef`s into model source code for the web2py DAL.

pub mod exporter;
pub mod web2py;

pub use exporter::ModelExporter;
pub use web2py::Web2pyExporter;

/// Separator placed between consecutive table definitions.
pub const TABLE_SEPARATOR: &str = "\n\n#--------\n";
