use serde::{Deserialize, Serialize};

use crate::domain::{Domain, DomainKind};

/// The type shape of one parameter node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParamKind {
    Int,
    Float,
    Bool,
    /// A string drawn from a fixed character pool. The pool is the literal
    /// text captured from the type expression, with no escaping.
    Str { pool: String },
    List { element: Box<ParamNode> },
    Tuple { element: Box<ParamNode> },
    Set { element: Box<ParamNode> },
    Dict {
        key: Box<ParamNode>,
        value: Box<ParamNode>,
    },
}

impl ParamKind {
    /// The keyword this kind carries in a type expression.
    pub fn name(&self) -> &'static str {
        match self {
            ParamKind::Int => "int",
            ParamKind::Float => "float",
            ParamKind::Bool => "bool",
            ParamKind::Str { .. } => "str",
            ParamKind::List { .. } => "list",
            ParamKind::Tuple { .. } => "tuple",
            ParamKind::Set { .. } => "set",
            ParamKind::Dict { .. } => "dict",
        }
    }
}

/// One node of the parameter tree: a type shape plus the two candidate
/// domains consumed by test generation.
///
/// For scalar leaves the domain entries are literal values; for `Str`
/// leaves they are candidate string lengths; for containers they are
/// candidate entry counts. Both domains always mirror the shape of the
/// node itself — domain population never changes arity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamNode {
    pub kind: ParamKind,
    pub exhaustive: Domain,
    pub random: Domain,
}

impl ParamNode {
    /// A node with both domains empty; the domain parser fills them in.
    pub fn new(kind: ParamKind) -> Self {
        ParamNode {
            kind,
            exhaustive: Domain::new(),
            random: Domain::new(),
        }
    }

    pub fn domain(&self, which: DomainKind) -> &Domain {
        match which {
            DomainKind::Exhaustive => &self.exhaustive,
            DomainKind::Random => &self.random,
        }
    }

    pub fn domain_mut(&mut self, which: DomainKind) -> &mut Domain {
        match which {
            DomainKind::Exhaustive => &mut self.exhaustive,
            DomainKind::Random => &mut self.random,
        }
    }

    /// True for kinds whose domain entries are sizes or lengths rather
    /// than literal values.
    pub fn is_sized(&self) -> bool {
        matches!(
            self.kind,
            ParamKind::Str { .. }
                | ParamKind::List { .. }
                | ParamKind::Tuple { .. }
                | ParamKind::Set { .. }
                | ParamKind::Dict { .. }
        )
    }
}

/// The fully parsed representation of one test-generation job.
///
/// Built once, atomically, by the compiler; parameter order matches the
/// declaration order in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSpec {
    pub function_name: String,
    pub parameters: Vec<ParamNode>,
    pub num_random_tests: u64,
}
