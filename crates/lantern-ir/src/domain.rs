use serde::{Deserialize, Serialize};

/// Selects which of a node's two domains an operation reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainKind {
    Exhaustive,
    Random,
}

/// A single domain entry.
///
/// Integer leaves, boolean leaves, and every size domain store `Int`
/// entries; float leaves store every entry as `Float`, including range
/// endpoints that were written as integer literals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainValue {
    Int(i64),
    Float(f64),
}

impl DomainValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            DomainValue::Int(i) => *i as f64,
            DomainValue::Float(f) => *f,
        }
    }

    /// The integer payload, if this entry is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DomainValue::Int(i) => Some(*i),
            DomainValue::Float(_) => None,
        }
    }
}

/// An ordered, duplicate-free set of candidate values or sizes.
///
/// Insertion order is preserved; inserting a value equal to one already
/// present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    values: Vec<DomainValue>,
}

impl Domain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: impl IntoIterator<Item = DomainValue>) -> Self {
        let mut domain = Domain::new();
        domain.extend(values);
        domain
    }

    pub fn insert(&mut self, value: DomainValue) {
        if !self.values.contains(&value) {
            self.values.push(value);
        }
    }

    pub fn extend(&mut self, values: impl IntoIterator<Item = DomainValue>) {
        for value in values {
            self.insert(value);
        }
    }

    pub fn values(&self) -> &[DomainValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
