//! Lantern IR — the domain-annotated parameter tree.
//!
//! A compiled config is a list of [`types::ParamNode`] trees, one per
//! function parameter, each carrying an exhaustive and a random candidate
//! domain at every node. The compiler builds this IR once, immutably; the
//! generator, harness, and minimizer stages consume it.

pub mod domain;
pub mod parse;
pub mod types;

pub use domain::{Domain, DomainKind, DomainValue};
pub use types::{ConfigSpec, ParamKind, ParamNode};
