use serde::{Deserialize, Serialize};

use super::Row;

/// How a host patch decides whether its initial-data attribute is new data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Refresh only when the row count differs. Same-length replacements
    /// with different content are not detected.
    #[default]
    RowCount,
    /// Refresh whenever the rows differ structurally.
    Content,
}

impl RefreshPolicy {
    #[must_use]
    pub fn detects_change(self, held: &[Row], incoming: &[Row]) -> bool {
        match self {
            Self::RowCount => held.len() != incoming.len(),
            Self::Content => held != incoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RefreshPolicy;
    use crate::core::Row;

    fn rows(values: &[i64]) -> Vec<Row> {
        values.iter().map(|v| Row::new().with("value", *v)).collect()
    }

    #[test]
    fn row_count_policy_ignores_same_length_changes() {
        let policy = RefreshPolicy::RowCount;
        assert!(!policy.detects_change(&rows(&[1, 2]), &rows(&[3, 4])));
        assert!(policy.detects_change(&rows(&[1, 2]), &rows(&[1, 2, 3])));
        assert!(policy.detects_change(&rows(&[1, 2]), &rows(&[1])));
    }

    #[test]
    fn content_policy_compares_rows() {
        let policy = RefreshPolicy::Content;
        assert!(policy.detects_change(&rows(&[1, 2]), &rows(&[3, 4])));
        assert!(!policy.detects_change(&rows(&[1, 2]), &rows(&[1, 2])));
    }
}
