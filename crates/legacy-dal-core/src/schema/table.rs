use crate::schema::{field::FieldDef, foreign_key::ForeignKeyRef, names::TableName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    pub name: TableName,
    /// Fields in `CREATE TABLE` column order.
    pub fields: Vec<FieldDef>,
}

impl TableDef {
    pub fn new(name: impl Into<TableName>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDef> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Insert a field, replacing one with the same name in its original
    /// position.
    pub fn upsert_field(&mut self, field: FieldDef) {
        match self.field_mut(&field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    /// Rewrite the field named by `fk.column` into a reference.
    ///
    /// Returns false when no such field was parsed.
    pub fn apply_foreign_key(&mut self, fk: &ForeignKeyRef) -> bool {
        match self.field_mut(&fk.column) {
            Some(field) => {
                field.make_reference(fk.ref_table.clone());
                true
            }
            None => false,
        }
    }
}
