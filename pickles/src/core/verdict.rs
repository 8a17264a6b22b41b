//! Result merge lattice.
//!
//! Verdicts form a join-semilattice with `Failed` as top and `Inconclusive`
//! as the identity: merging is associative, commutative, and idempotent, so
//! per-example or per-report results can be combined in any order.

use serde::{Deserialize, Serialize};

/// Aggregate verdict for a feature, scenario, or scenario outline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestResult {
    Passed,
    Failed,
    /// No matching test-execution record, or a status we do not rank.
    #[default]
    Inconclusive,
}

impl TestResult {
    /// Normalize a raw outcome string from a report.
    ///
    /// Case-insensitive `passed`/`failed`; everything else, including a
    /// missing value, is `Inconclusive`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("passed") => Self::Passed,
            Some(value) if value.eq_ignore_ascii_case("failed") => Self::Failed,
            _ => Self::Inconclusive,
        }
    }

    /// Join two verdicts: `Failed` dominates `Passed`, which dominates
    /// `Inconclusive`.
    pub fn merge(self, other: Self) -> Self {
        if self.rank() >= other.rank() {
            self
        } else {
            other
        }
    }

    /// Reduce any number of verdicts; empty input is `Inconclusive`.
    pub fn merge_all<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        results
            .into_iter()
            .fold(Self::Inconclusive, Self::merge)
    }

    /// Normalize and reduce raw outcome strings in one pass.
    pub fn merge_raw<'a, I>(raw: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        Self::merge_all(raw.into_iter().map(Self::from_raw))
    }

    fn rank(self) -> u8 {
        match self {
            Self::Inconclusive => 0,
            Self::Passed => 1,
            Self::Failed => 2,
        }
    }
}

impl FromIterator<TestResult> for TestResult {
    fn from_iter<I: IntoIterator<Item = TestResult>>(iter: I) -> Self {
        Self::merge_all(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TestResult; 3] = [
        TestResult::Passed,
        TestResult::Failed,
        TestResult::Inconclusive,
    ];

    #[test]
    fn normalizes_raw_strings_case_insensitively() {
        assert_eq!(TestResult::from_raw(Some("Passed")), TestResult::Passed);
        assert_eq!(TestResult::from_raw(Some("FAILED")), TestResult::Failed);
        assert_eq!(TestResult::from_raw(Some("ignored")), TestResult::Inconclusive);
        assert_eq!(TestResult::from_raw(Some("")), TestResult::Inconclusive);
        assert_eq!(TestResult::from_raw(None), TestResult::Inconclusive);
    }

    #[test]
    fn failed_dominates() {
        assert_eq!(
            TestResult::merge_all([TestResult::Passed, TestResult::Passed]),
            TestResult::Passed
        );
        assert_eq!(
            TestResult::merge_all([TestResult::Passed, TestResult::Failed]),
            TestResult::Failed
        );
        assert_eq!(
            TestResult::merge_all([TestResult::Inconclusive, TestResult::Passed]),
            TestResult::Passed
        );
        assert_eq!(
            TestResult::merge_all([TestResult::Inconclusive, TestResult::Failed]),
            TestResult::Failed
        );
    }

    #[test]
    fn empty_input_is_inconclusive() {
        assert_eq!(TestResult::merge_all([]), TestResult::Inconclusive);
        let collected: TestResult = Vec::new().into_iter().collect();
        assert_eq!(collected, TestResult::Inconclusive);
    }

    #[test]
    fn merge_is_commutative_associative_and_idempotent() {
        for a in ALL {
            assert_eq!(a.merge(a), a);
            assert_eq!(a.merge(TestResult::Inconclusive), a);
            for b in ALL {
                assert_eq!(a.merge(b), b.merge(a));
                for c in ALL {
                    assert_eq!(a.merge(b).merge(c), a.merge(b.merge(c)));
                }
            }
        }
    }

    #[test]
    fn merge_is_invariant_under_permutation() {
        let inputs = [
            TestResult::Passed,
            TestResult::Inconclusive,
            TestResult::Failed,
        ];
        let permutations = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for order in permutations {
            let merged: TestResult = order.iter().map(|&i| inputs[i]).collect();
            assert_eq!(merged, TestResult::Failed);
        }
    }

    #[test]
    fn merge_raw_normalizes_each_entry() {
        let merged = TestResult::merge_raw([Some("passed"), None, Some("Pending")]);
        assert_eq!(merged, TestResult::Passed);
    }
}
