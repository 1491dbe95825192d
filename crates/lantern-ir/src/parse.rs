use crate::types::ConfigSpec;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Deserializes a previously serialized [`ConfigSpec`]. Pipeline stages
/// that run out of process exchange the compiled spec in this form.
pub fn parse_spec(json: &str) -> Result<ConfigSpec, ParseError> {
    Ok(serde_json::from_str(json)?)
}
