//! Per-record validation outcomes reported alongside the views.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Why a raw record was left out of every view.
pub enum RejectionReason {
    InvalidAmount,
    InvalidDate,
    UnknownType,
}

impl RejectionReason {
    pub const ALL: [RejectionReason; 3] = [
        RejectionReason::InvalidAmount,
        RejectionReason::InvalidDate,
        RejectionReason::UnknownType,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RejectionReason::InvalidAmount => "InvalidAmount",
            RejectionReason::InvalidDate => "InvalidDate",
            RejectionReason::UnknownType => "UnknownType",
        }
    }

    /// Lower-case phrase used in user-facing warnings.
    pub fn describe(self) -> &'static str {
        match self {
            RejectionReason::InvalidAmount => "invalid amount",
            RejectionReason::InvalidDate => "invalid date",
            RejectionReason::UnknownType => "unknown type",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// Position of the record in the input snapshot.
    pub index: usize,
    pub record_id: String,
    pub reason: RejectionReason,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Advisory list of skipped records, in input order.
pub struct Diagnostics {
    rejected: Vec<Rejection>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rejection: Rejection) {
        self.rejected.push(rejection);
    }

    pub fn rejections(&self) -> &[Rejection] {
        &self.rejected
    }

    pub fn count(&self) -> usize {
        self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn count_by_reason(&self, reason: RejectionReason) -> usize {
        self.rejected
            .iter()
            .filter(|rejection| rejection.reason == reason)
            .count()
    }

    /// Warnings such as `"3 records skipped: invalid amount"`, one per reason present.
    pub fn summary_lines(&self) -> Vec<String> {
        RejectionReason::ALL
            .into_iter()
            .filter_map(|reason| {
                let count = self.count_by_reason(reason);
                if count == 0 {
                    return None;
                }
                let noun = if count == 1 { "record" } else { "records" };
                Some(format!("{count} {noun} skipped: {}", reason.describe()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection(index: usize, reason: RejectionReason) -> Rejection {
        Rejection {
            index,
            record_id: format!("txn-{index}"),
            reason,
            detail: String::new(),
        }
    }

    #[test]
    fn summary_groups_by_reason_in_fixed_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(rejection(4, RejectionReason::UnknownType));
        diagnostics.push(rejection(1, RejectionReason::InvalidAmount));
        diagnostics.push(rejection(2, RejectionReason::InvalidAmount));
        diagnostics.push(rejection(3, RejectionReason::InvalidAmount));

        assert_eq!(diagnostics.count(), 4);
        assert_eq!(
            diagnostics.summary_lines(),
            vec![
                "3 records skipped: invalid amount".to_string(),
                "1 record skipped: unknown type".to_string(),
            ]
        );
    }

    #[test]
    fn empty_diagnostics_have_no_summary() {
        let diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        assert!(diagnostics.summary_lines().is_empty());
    }
}
