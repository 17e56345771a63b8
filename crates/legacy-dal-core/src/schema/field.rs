use std::fmt;

use crate::schema::{field_type::FieldType, names::FieldName};

/// Validator attached to a generated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requires {
    /// `IS_NOT_EMPTY()`, from a `NOT NULL` column.
    NotEmpty,
    /// `IS_IN_SET((...))` holding the enum options exactly as dumped,
    /// e.g. `'active','inactive'`.
    InSet(String),
}

impl fmt::Display for Requires {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requires::NotEmpty => f.write_str("IS_NOT_EMPTY()"),
            Requires::InSet(options) => write!(f, "IS_IN_SET(({}))", options),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: FieldName,
    pub field_type: FieldType,
    pub requires: Option<Requires>,
    pub length: Option<u32>,
}

impl FieldDef {
    pub fn new(name: impl Into<FieldName>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            requires: None,
            length: None,
        }
    }

    pub fn with_requires(mut self, requires: Requires) -> Self {
        self.requires = Some(requires);
        self
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Turn this field into a reference to `table`, dropping any validator
    /// or length it had.
    pub fn make_reference(&mut self, table: impl Into<String>) {
        self.field_type = FieldType::Reference(table.into());
        self.requires = None;
        self.length = None;
    }
}
