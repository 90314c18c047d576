use serde::Serialize;

/// Administrator dashboard counters
///
/// `available` is signed so that `available + occupied == total` holds
/// even when the ledger outgrows the configured room count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    pub total: usize,
    pub occupied: usize,
    pub pending: usize,
    pub available: i64,
}

impl QueueStats {
    pub fn compute(total: usize, occupied: usize, pending: usize) -> Self {
        Self {
            total,
            occupied,
            pending,
            available: total as i64 - occupied as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_is_total_minus_occupied() {
        let stats = QueueStats::compute(350, 2, 4);
        assert_eq!(stats.available, 348);
        assert_eq!(stats.pending, 4);
    }

    #[test]
    fn test_available_may_go_negative() {
        let stats = QueueStats::compute(1, 3, 0);
        assert_eq!(stats.available, -2);
        assert_eq!(stats.available + stats.occupied as i64, stats.total as i64);
    }
}
