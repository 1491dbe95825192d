use lantern_ir::domain::{DomainKind, DomainValue};
use lantern_ir::types::{ParamKind, ParamNode};

use crate::error::ConfigError;

/// Scalar leaf categories; each picks its own value-list validation rules.
#[derive(Clone, Copy)]
enum Scalar {
    Int,
    Float,
    Bool,
}

/// Applies one domain expression to a node tree, populating the selected
/// domain field of every node it reaches.
///
/// The text is walked in lock-step with the tree: scalar and string leaves
/// consume the whole text as a value-list, while containers consume a size
/// list up to their opening parenthesis and recurse into the remainder.
/// Leftover or missing nesting levels surface as errors from whichever
/// node the mismatched text lands on.
pub fn apply_domain(
    text: &str,
    node: &mut ParamNode,
    which: DomainKind,
) -> Result<(), ConfigError> {
    let text = text.trim();
    screen_parens(text)?;
    screen_colons(text)?;

    let values = match &mut node.kind {
        ParamKind::Int => scalar_values(text, Scalar::Int)?,
        ParamKind::Float => scalar_values(text, Scalar::Float)?,
        ParamKind::Bool => scalar_values(text, Scalar::Bool)?,
        // String domains are candidate lengths, validated like sizes.
        ParamKind::Str { .. } => size_values(text)?,
        ParamKind::List { element } | ParamKind::Tuple { element } | ParamKind::Set { element } => {
            let open = open_paren(text)?;
            let sizes = size_values(&text[..open])?;
            apply_domain(&text[open + 1..], element, which)?;
            sizes
        }
        ParamKind::Dict { key, value } => {
            let open = open_paren(text)?;
            let sizes = size_values(&text[..open])?;
            let body = &text[open + 1..];
            let colon =
                key_value_split(body, key).ok_or_else(|| ConfigError::MissingColon {
                    text: body.to_string(),
                })?;
            apply_domain(&body[..colon], key, which)?;
            apply_domain(&body[colon + 1..], value, which)?;
            sizes
        }
    };

    node.domain_mut(which).extend(values);
    Ok(())
}

/// Rejects leading, trailing, or doubled parentheses.
pub(crate) fn screen_parens(text: &str) -> Result<(), ConfigError> {
    if text.starts_with('(') || text.ends_with('(') || text.contains("((") {
        return Err(ConfigError::SpuriousParenthesis {
            text: text.to_string(),
        });
    }
    Ok(())
}

/// Rejects leading, trailing, or doubled colons.
pub(crate) fn screen_colons(text: &str) -> Result<(), ConfigError> {
    if text.starts_with(':') || text.ends_with(':') || text.contains("::") {
        return Err(ConfigError::SpuriousColon {
            text: text.to_string(),
        });
    }
    Ok(())
}

fn open_paren(text: &str) -> Result<usize, ConfigError> {
    text.find('(').ok_or_else(|| ConfigError::MissingParenthesis {
        text: text.to_string(),
    })
}

/// Finds the colon separating the key and value domain texts of a dict.
///
/// The key's domain contains exactly one colon per dict nested in the key
/// subtree, so the split point is the first colon past those. This is the
/// structure-aware replacement for a first-occurrence scan, which only
/// holds when the key subtree contains no dict.
fn key_value_split(body: &str, key: &ParamNode) -> Option<usize> {
    let mut pending = dict_count(key);
    for (i, ch) in body.char_indices() {
        if ch == ':' {
            if pending == 0 {
                return Some(i);
            }
            pending -= 1;
        }
    }
    None
}

fn dict_count(node: &ParamNode) -> usize {
    match &node.kind {
        ParamKind::Dict { key, value } => 1 + dict_count(key) + dict_count(value),
        ParamKind::List { element }
        | ParamKind::Tuple { element }
        | ParamKind::Set { element } => dict_count(element),
        _ => 0,
    }
}

/// Parses a value-list (`a~b` range, `[v1, v2, ...]` array, or bare value)
/// for a scalar leaf, applying the leaf's typing rules.
///
/// Range endpoints are always integer literals; a float leaf coerces the
/// expanded range to floats, and a bare float value may be an integer
/// literal too, but an explicit float array requires each entry to carry a
/// decimal point. The asymmetry is part of the format.
fn scalar_values(text: &str, scalar: Scalar) -> Result<Vec<DomainValue>, ConfigError> {
    if let Some(tilde) = text.find('~') {
        let (low, high) = range_bounds(text, tilde)?;
        let mut values = Vec::new();
        for v in low..=high {
            values.push(match scalar {
                Scalar::Int => DomainValue::Int(v),
                Scalar::Float => DomainValue::Float(v as f64),
                Scalar::Bool => {
                    ensure_bool(v)?;
                    DomainValue::Int(v)
                }
            });
        }
        Ok(values)
    } else if let Some(tokens) = array_tokens(text) {
        tokens
            .into_iter()
            .map(|tok| scalar_token(tok, scalar))
            .collect()
    } else {
        Ok(vec![bare_value(text, scalar)?])
    }
}

/// A bare value outside an array. A float leaf accepts an integer literal
/// here and coerces it, as the range branch does; the decimal-point
/// requirement applies to explicit array entries only.
fn bare_value(tok: &str, scalar: Scalar) -> Result<DomainValue, ConfigError> {
    match scalar {
        Scalar::Float => {
            let v: f64 = tok.parse().map_err(|_| ConfigError::DomainSyntax {
                text: tok.to_string(),
            })?;
            Ok(DomainValue::Float(v))
        }
        _ => scalar_token(tok, scalar),
    }
}

/// Parses a value-list of non-negative integers, used for both container
/// size domains and string length domains.
fn size_values(text: &str) -> Result<Vec<DomainValue>, ConfigError> {
    let text = text.trim();
    let mut values = Vec::new();
    if let Some(tilde) = text.find('~') {
        let (low, high) = range_bounds(text, tilde)?;
        values.extend((low..=high).map(DomainValue::Int));
    } else if let Some(tokens) = array_tokens(text) {
        for tok in tokens {
            values.push(DomainValue::Int(int_literal(tok)?));
        }
    } else {
        values.push(DomainValue::Int(int_literal(text)?));
    }
    for value in &values {
        if let Some(size) = value.as_int() {
            if size < 0 {
                return Err(ConfigError::NegativeSizeDomain { value: size });
            }
        }
    }
    Ok(values)
}

fn scalar_token(tok: &str, scalar: Scalar) -> Result<DomainValue, ConfigError> {
    match scalar {
        Scalar::Int => Ok(DomainValue::Int(int_literal(tok)?)),
        Scalar::Bool => {
            let v = int_literal(tok)?;
            ensure_bool(v)?;
            Ok(DomainValue::Int(v))
        }
        Scalar::Float => {
            if !tok.contains('.') {
                return Err(ConfigError::DomainTypeMismatch {
                    value: tok.to_string(),
                    expected: "a float literal with a decimal point",
                });
            }
            let v: f64 = tok.parse().map_err(|_| ConfigError::DomainSyntax {
                text: tok.to_string(),
            })?;
            Ok(DomainValue::Float(v))
        }
    }
}

/// Splits `a~b` at the first tilde and validates both bounds as integer
/// literals; rejects inverted bounds.
fn range_bounds(text: &str, tilde: usize) -> Result<(i64, i64), ConfigError> {
    let low = int_literal(text[..tilde].trim())?;
    let high = int_literal(text[tilde + 1..].trim())?;
    if low > high {
        return Err(ConfigError::EmptyRange { low, high });
    }
    Ok((low, high))
}

/// Strips `[` `]` and splits on commas; `None` if the text is not an array.
fn array_tokens(text: &str) -> Option<Vec<&str>> {
    let inner = text.strip_prefix('[')?.strip_suffix(']')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn int_literal(tok: &str) -> Result<i64, ConfigError> {
    if tok.contains('.') {
        return Err(ConfigError::DomainTypeMismatch {
            value: tok.to_string(),
            expected: "an integer",
        });
    }
    tok.parse().map_err(|_| ConfigError::DomainSyntax {
        text: tok.to_string(),
    })
}

fn ensure_bool(v: i64) -> Result<(), ConfigError> {
    if v != 0 && v != 1 {
        return Err(ConfigError::DomainTypeMismatch {
            value: v.to_string(),
            expected: "0 or 1",
        });
    }
    Ok(())
}
