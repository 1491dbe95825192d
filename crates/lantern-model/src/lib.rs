//! Lantern model — the contracts shared between the compiler and the
//! downstream generation, execution, and minimization stages.
//!
//! The compiler's only obligation to these stages is a well-formed,
//! fully-domained [`lantern_ir::ConfigSpec`]; everything here describes
//! the currency they exchange on top of it.

pub mod pipeline;
pub mod results;
pub mod value;

pub use pipeline::{ExecutionHarness, Materializer, Minimizer};
pub use results::{TestCase, TestResults};
pub use value::PyValue;
