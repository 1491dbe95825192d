use std::fmt;

use serde::{Deserialize, Serialize};

/// A concrete Python value filling one argument slot of a test case.
///
/// `Display` renders the Python literal form so a case can be handed to an
/// interpreter verbatim. Strings use single quotes for compatibility with
/// command-line invocation of Python scripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", content = "value")]
pub enum PyValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Vec<PyValue>),
    Tuple(Vec<PyValue>),
    Set(Vec<PyValue>),
    /// Entries in insertion order; generators never emit duplicate keys.
    Dict(Vec<(PyValue, PyValue)>),
}

impl fmt::Display for PyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PyValue::Int(v) => write!(f, "{v}"),
            // Debug formatting keeps the decimal point on whole floats
            PyValue::Float(v) => write!(f, "{v:?}"),
            PyValue::Bool(true) => write!(f, "True"),
            PyValue::Bool(false) => write!(f, "False"),
            PyValue::Str(s) => write!(f, "'{s}'"),
            PyValue::List(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            PyValue::Tuple(items) => {
                write!(f, "(")?;
                write_joined(f, items)?;
                if items.len() == 1 {
                    // 1-tuples need the trailing comma
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            PyValue::Set(items) => {
                if items.is_empty() {
                    return write!(f, "set()");
                }
                write!(f, "{{")?;
                write_joined(f, items)?;
                write!(f, "}}")
            }
            PyValue::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[PyValue]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
