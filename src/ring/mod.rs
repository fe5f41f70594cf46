mod raw_ring;
mod ring_buffer;

pub use self::ring_buffer::{IntoIter, RingBuffer};

use core::cmp;

/// Policy for bulk transfers when the full request cannot be satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockMode {
    /// Move exactly the requested amount or nothing at all.
    Exact,
    /// Move as much of the requested amount as currently fits.
    BestEffort,
}

impl BlockMode {
    /// Number of elements a bulk transfer moves, `0` meaning rejected.
    ///
    /// `available` is the live count when draining and the free slot count
    /// when filling. An exact request larger than `capacity` can never be
    /// satisfied atomically, so it is rejected whatever the occupancy.
    pub(crate) fn amount(self, requested: usize, available: usize, capacity: usize) -> usize {
        if requested == 0 || available == 0 {
            return 0;
        }
        match self {
            BlockMode::Exact if requested > capacity || requested > available => 0,
            BlockMode::Exact => requested,
            BlockMode::BestEffort => cmp::min(requested, available),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BlockMode::{BestEffort, Exact};

    #[test]
    fn zero_request_or_nothing_available_is_rejected() {
        for mode in [Exact, BestEffort] {
            assert_eq!(mode.amount(0, 4, 4), 0);
            assert_eq!(mode.amount(3, 0, 4), 0);
        }
    }

    #[test]
    fn exact_is_all_or_nothing() {
        assert_eq!(Exact.amount(3, 4, 4), 3);
        assert_eq!(Exact.amount(4, 4, 4), 4);
        assert_eq!(Exact.amount(3, 2, 4), 0);
        assert_eq!(Exact.amount(5, 5, 4), 0);
    }

    #[test]
    fn best_effort_caps_at_available() {
        assert_eq!(BestEffort.amount(10, 3, 4), 3);
        assert_eq!(BestEffort.amount(2, 3, 4), 2);
        assert_eq!(BestEffort.amount(100, 4, 4), 4);
    }
}
