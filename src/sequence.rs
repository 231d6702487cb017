// Sequence Allocator - the NNNN segment of the accession code
//
// The next sequence number is re-derived from a live count of the parish's
// catalogued items on every call, instead of an in-process counter that
// would drift across server instances. Counting is delegated to an
// external collaborator; a failed count is a failed allocation, never a
// silent restart from 0001.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum width of the sequence segment. Longer counts widen the segment
/// rather than truncating it.
pub const SEQUENCE_MIN_WIDTH: usize = 4;

// ============================================================================
// COUNT COLLABORATOR
// ============================================================================

/// Read-only view of how many items a parish already has in the catalog.
///
/// Implemented outside this crate by a count query scoped to the parish
/// (in production, against the catalog store). Implementations must return
/// the current count or an error; they must not guess.
pub trait ItemCounter {
    fn count_items_for_parish(&self, parish_id: &str) -> Result<u64>;
}

// ============================================================================
// SEQUENCE ALLOCATION
// ============================================================================

/// A parish's counting state at the moment of allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceContext {
    pub parish_id: String,
    pub prior_count: u64,
}

impl SequenceContext {
    /// The 1-based, zero-padded sequence for the next item.
    pub fn next_sequence(&self) -> String {
        format_sequence(self.prior_count + 1)
    }
}

/// Format a sequence number: decimal, left-padded with '0' to a minimum
/// width of 4. 1 → "0001", 12345 → "12345".
pub fn format_sequence(number: u64) -> String {
    format!("{:0width$}", number, width = SEQUENCE_MIN_WIDTH)
}

/// Allocate the next sequence string for a parish.
///
/// The only fallible step of code generation: a failing counter propagates
/// as an error so two items can never silently share a number.
pub fn allocate_sequence(counter: &dyn ItemCounter, parish_id: &str) -> Result<String> {
    let prior_count = counter
        .count_items_for_parish(parish_id)
        .with_context(|| format!("failed to count catalogued items for parish {}", parish_id))?;

    let context = SequenceContext {
        parish_id: parish_id.to_string(),
        prior_count,
    };
    Ok(context.next_sequence())
}

// ============================================================================
// IN-MEMORY COUNTER
// ============================================================================

/// HashMap-backed counter for tests and the CLI simulation. Parishes with
/// no recorded items count as 0.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCounter {
    counts: HashMap<String, u64>,
}

impl InMemoryCounter {
    pub fn new() -> Self {
        InMemoryCounter::default()
    }

    pub fn with_count(parish_id: impl Into<String>, count: u64) -> Self {
        let mut counter = InMemoryCounter::new();
        counter.set_count(parish_id, count);
        counter
    }

    pub fn set_count(&mut self, parish_id: impl Into<String>, count: u64) {
        self.counts.insert(parish_id.into(), count);
    }

    /// Register one newly catalogued item for the parish.
    pub fn record_item(&mut self, parish_id: &str) {
        *self.counts.entry(parish_id.to_string()).or_insert(0) += 1;
    }
}

impl ItemCounter for InMemoryCounter {
    fn count_items_for_parish(&self, parish_id: &str) -> Result<u64> {
        Ok(self.counts.get(parish_id).copied().unwrap_or(0))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    /// Counter that always fails, standing in for an unreachable store.
    struct FailingCounter;

    impl ItemCounter for FailingCounter {
        fn count_items_for_parish(&self, _parish_id: &str) -> Result<u64> {
            Err(anyhow!("catalog store unreachable"))
        }
    }

    #[test]
    fn test_format_sequence_padding() {
        assert_eq!(format_sequence(1), "0001");
        assert_eq!(format_sequence(25), "0025");
        assert_eq!(format_sequence(1234), "1234");
        // Width 4 is a minimum, not a cap
        assert_eq!(format_sequence(12345), "12345");
    }

    #[test]
    fn test_allocate_is_one_based() {
        let counter = InMemoryCounter::new();
        let sequence = allocate_sequence(&counter, "parish-1").unwrap();
        assert_eq!(sequence, "0001");
    }

    #[test]
    fn test_allocate_counts_per_parish() {
        let mut counter = InMemoryCounter::with_count("parish-a", 24);
        counter.set_count("parish-b", 7);

        assert_eq!(allocate_sequence(&counter, "parish-a").unwrap(), "0025");
        assert_eq!(allocate_sequence(&counter, "parish-b").unwrap(), "0008");
        assert_eq!(allocate_sequence(&counter, "parish-c").unwrap(), "0001");
    }

    #[test]
    fn test_record_item_advances_sequence() {
        let mut counter = InMemoryCounter::new();
        assert_eq!(allocate_sequence(&counter, "parish-1").unwrap(), "0001");

        counter.record_item("parish-1");
        assert_eq!(allocate_sequence(&counter, "parish-1").unwrap(), "0002");
    }

    #[test]
    fn test_counter_failure_propagates() {
        let result = allocate_sequence(&FailingCounter, "parish-1");
        assert!(result.is_err());

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("parish-1"));
        assert!(message.contains("unreachable"));
    }

    #[test]
    fn test_sequence_is_digits_only() {
        for count in [0, 1, 9, 99, 999, 9999, 99999] {
            let counter = InMemoryCounter::with_count("p", count);
            let sequence = allocate_sequence(&counter, "p").unwrap();
            assert!(sequence.len() >= SEQUENCE_MIN_WIDTH);
            assert!(sequence.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(sequence.parse::<u64>().unwrap(), count + 1);
        }
    }
}
