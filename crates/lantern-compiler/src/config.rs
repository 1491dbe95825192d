use std::path::Path;

use serde_json::{Map, Value};

use lantern_ir::domain::DomainKind;
use lantern_ir::types::ConfigSpec;

use crate::domain::apply_domain;
use crate::error::ConfigError;
use crate::schema::parse_type_expr;

const KEY_FNAME: &str = "fname";
const KEY_TYPES: &str = "types";
const KEY_EX_DOMAIN: &str = "exhaustive domain";
const KEY_RAN_DOMAIN: &str = "random domain";
const KEY_NUM_RANDOM: &str = "num random";

const REQUIRED_KEYS: [&str; 5] = [
    KEY_FNAME,
    KEY_TYPES,
    KEY_EX_DOMAIN,
    KEY_RAN_DOMAIN,
    KEY_NUM_RANDOM,
];

/// Parses the contents of a config file into a [`ConfigSpec`].
///
/// Validation short-circuits: a cheap textual pre-check runs before the
/// full JSON decode, the three parallel arrays must agree in length, and
/// only then is each parameter's type expression parsed and annotated with
/// its two domains. No partial result is ever returned.
pub fn parse_config(raw: &str) -> Result<ConfigSpec, ConfigError> {
    precheck(raw)?;

    let root: Value =
        serde_json::from_str(raw).map_err(|err| ConfigError::MalformedContainer {
            reason: err.to_string(),
        })?;
    let Value::Object(obj) = root else {
        return Err(ConfigError::MalformedContainer {
            reason: "top level is not an object".to_string(),
        });
    };

    let function_name = string_value(&obj, KEY_FNAME)?;
    let types = string_array(&obj, KEY_TYPES)?;
    let ex_domains = string_array(&obj, KEY_EX_DOMAIN)?;
    let ran_domains = string_array(&obj, KEY_RAN_DOMAIN)?;
    let num_random_tests = count_value(&obj, KEY_NUM_RANDOM)?;

    check_length(KEY_EX_DOMAIN, types.len(), ex_domains.len())?;
    check_length(KEY_RAN_DOMAIN, types.len(), ran_domains.len())?;

    let mut parameters = Vec::with_capacity(types.len());
    for i in 0..types.len() {
        let mut node = parse_type_expr(&types[i])?;
        apply_domain(&ex_domains[i], &mut node, DomainKind::Exhaustive)?;
        apply_domain(&ran_domains[i], &mut node, DomainKind::Random)?;
        parameters.push(node);
    }

    Ok(ConfigSpec {
        function_name,
        parameters,
        num_random_tests,
    })
}

/// Reads and parses the config file at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigSpec, ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    parse_config(&raw)
}

/// Cheap textual screen run before the full decode, so an obviously broken
/// file fails with a direct diagnostic instead of a decoder message.
fn precheck(raw: &str) -> Result<(), ConfigError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('{') || !trimmed.ends_with('}') {
        return Err(ConfigError::MalformedContainer {
            reason: "config must be a single JSON object".to_string(),
        });
    }
    for key in REQUIRED_KEYS {
        if !raw.contains(key) {
            return Err(ConfigError::MissingKey { key });
        }
    }
    Ok(())
}

fn required<'a>(obj: &'a Map<String, Value>, key: &'static str) -> Result<&'a Value, ConfigError> {
    obj.get(key).ok_or(ConfigError::MissingKey { key })
}

fn string_value(obj: &Map<String, Value>, key: &'static str) -> Result<String, ConfigError> {
    match required(obj, key)? {
        Value::String(s) => Ok(s.clone()),
        _ => Err(ConfigError::WrongValueType {
            key,
            expected: "a string",
        }),
    }
}

fn string_array(obj: &Map<String, Value>, key: &'static str) -> Result<Vec<String>, ConfigError> {
    let Value::Array(items) = required(obj, key)? else {
        return Err(ConfigError::WrongValueType {
            key,
            expected: "an array of strings",
        });
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(ConfigError::WrongValueType {
                key,
                expected: "an array of strings",
            }),
        })
        .collect()
}

fn count_value(obj: &Map<String, Value>, key: &'static str) -> Result<u64, ConfigError> {
    required(obj, key)?
        .as_u64()
        .ok_or(ConfigError::WrongValueType {
            key,
            expected: "a non-negative integer",
        })
}

fn check_length(key: &'static str, expected: usize, actual: usize) -> Result<(), ConfigError> {
    if expected != actual {
        return Err(ConfigError::LengthMismatch {
            key,
            expected,
            actual,
        });
    }
    Ok(())
}
