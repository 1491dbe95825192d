use lantern_ir::types::ConfigSpec;

use crate::results::{TestCase, TestResults};

/// Produces the concrete base test set for a compiled spec: one
/// combinatorial sweep over every node's exhaustive domain, plus
/// `num_random_tests` additional cases sampled from the random domains.
///
/// Size-domain entries select container sizes and string lengths, never
/// literal elements.
pub trait Materializer {
    type Error;

    fn materialize(&self, spec: &ConfigSpec) -> Result<Vec<TestCase>, Self::Error>;
}

/// Runs every case against the reference implementation and each candidate
/// implementation out of process, reporting which candidates diverged on
/// which case.
pub trait ExecutionHarness {
    type Error;

    fn run(&self, function_name: &str, cases: Vec<TestCase>)
        -> Result<TestResults, Self::Error>;
}

/// Selects a subset of cases whose divergence sets together cover every
/// divergent candidate in the results.
pub trait Minimizer {
    fn minimize(&self, results: &TestResults) -> Vec<TestCase>;
}
