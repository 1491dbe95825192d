use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::PyValue;

/// One generated test case: the ordered argument list for a single call of
/// the function under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    args: Vec<PyValue>,
}

impl TestCase {
    pub fn new(args: Vec<PyValue>) -> Self {
        TestCase { args }
    }

    pub fn args(&self) -> &[PyValue] {
        &self.args
    }
}

impl fmt::Display for TestCase {
    /// Renders the comma-separated argument list, ready to be wrapped in a
    /// call expression.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        Ok(())
    }
}

/// The outcome of running every generated case against the reference and
/// each candidate implementation.
///
/// Candidates are identified by index. `case_to_impls[i]` is the set of
/// candidates whose output diverged from the reference on case `i`;
/// `wrong_set` is the union over all cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResults {
    cases: Vec<TestCase>,
    case_to_impls: Vec<BTreeSet<usize>>,
    wrong_set: BTreeSet<usize>,
}

impl TestResults {
    pub fn new(
        cases: Vec<TestCase>,
        case_to_impls: Vec<BTreeSet<usize>>,
        wrong_set: BTreeSet<usize>,
    ) -> Self {
        TestResults {
            cases,
            case_to_impls,
            wrong_set,
        }
    }

    /// The `index`-th executed case, or `None` when out of bounds.
    pub fn case(&self, index: usize) -> Option<&TestCase> {
        self.cases.get(index)
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Per-case sets of candidate indices caught by that case.
    pub fn case_to_impls(&self) -> &[BTreeSet<usize>] {
        &self.case_to_impls
    }

    /// Every candidate index that failed at least one case.
    pub fn wrong_set(&self) -> &BTreeSet<usize> {
        &self.wrong_set
    }
}
