/// Everything that can go wrong while compiling a config file.
///
/// Each failing validation branch maps to its own variant so callers and
/// tests can match on the failure category rather than message text.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not a JSON object: {reason}")]
    MalformedContainer { reason: String },

    #[error("required key '{key}' is missing")]
    MissingKey { key: &'static str },

    #[error("key '{key}' must hold {expected}")]
    WrongValueType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("'{key}' lists {actual} entries but 'types' lists {expected}")]
    LengthMismatch {
        key: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unrecognized type expression '{text}'")]
    UnrecognizedType { text: String },

    #[error("missing opening parenthesis in '{text}'")]
    MissingParenthesis { text: String },

    #[error("missing key/value colon in '{text}'")]
    MissingColon { text: String },

    #[error("spurious parenthesis in '{text}'")]
    SpuriousParenthesis { text: String },

    #[error("spurious colon in '{text}'")]
    SpuriousColon { text: String },

    #[error("empty range: lower bound {low} exceeds upper bound {high}")]
    EmptyRange { low: i64, high: i64 },

    #[error("domain value '{value}' is not {expected}")]
    DomainTypeMismatch {
        value: String,
        expected: &'static str,
    },

    #[error("negative size {value} in a container or string domain")]
    NegativeSizeDomain { value: i64 },

    #[error("malformed domain expression '{text}'")]
    DomainSyntax { text: String },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}
