pub type TableName = String;
pub type FieldName = String;
