/// Table names from the output of `mysql -e 'show tables;'`.
///
/// The output is split on whitespace and the header (`Tables_in_<db>`) is dropped.
pub fn parse_table_names(output: &str) -> Vec<String> {
    output
        .split_whitespace()
        .skip(1)
        .map(str::to_string)
        .collect()
}
