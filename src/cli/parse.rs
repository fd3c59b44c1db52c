use rutter_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a node id from string: a single alphanumeric character
pub fn parse_node_id(s: &str) -> std::result::Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(id), None) if id.is_alphanumeric() => Ok(id),
        _ => Err(format!(
            "node ids are single alphanumeric characters, got '{}'",
            s
        )),
    }
}
