pub mod extract;
pub mod init;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_support;

pub use extract::cmd_extract;
pub use init::cmd_init;
pub use schema::cmd_schema;
