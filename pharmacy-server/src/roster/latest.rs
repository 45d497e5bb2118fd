//! Latest-dispatched-wins acceptance of roster deliveries.

use std::fmt;

/// Ordering token attached to a request when it is dispatched.
///
/// Stamps increase monotonically per [`super::RosterFeed`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stamp(pub(super) u64);

impl Stamp {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stamp({})", self.0)
    }
}

/// A completed request, as delivered to the caller's context.
#[derive(Debug)]
pub struct Delivery<T> {
    pub stamp: Stamp,
    pub day_offset: i32,
    pub result: T,
}

/// Outcome of offering a delivery to [`LatestWins`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// The delivery belongs to the newest dispatched request and is now current.
    Accepted,
    /// A newer request has been dispatched since; the delivery was dropped.
    Stale,
}

/// Holds the result of the most recently dispatched request.
///
/// Requests are not cancelled, so they may complete in any order. A
/// delivery is accepted only if its stamp is the newest one dispatched;
/// anything older is dropped on arrival, success or failure alike.
#[derive(Debug)]
pub struct LatestWins<T> {
    newest_dispatched: Option<Stamp>,
    current: Option<Delivery<T>>,
}

impl<T> LatestWins<T> {
    pub fn new() -> Self {
        Self {
            newest_dispatched: None,
            current: None,
        }
    }

    /// Record that a request with `stamp` has been sent.
    pub fn dispatched(&mut self, stamp: Stamp) {
        if self.newest_dispatched.is_none_or(|newest| stamp > newest) {
            self.newest_dispatched = Some(stamp);
        }
    }

    /// Offer a completed request.
    pub fn offer(&mut self, delivery: Delivery<T>) -> Offer {
        if self.newest_dispatched != Some(delivery.stamp) {
            return Offer::Stale;
        }

        self.current = Some(delivery);
        Offer::Accepted
    }

    /// The accepted delivery, if the newest request has completed.
    pub fn current(&self) -> Option<&Delivery<T>> {
        self.current.as_ref()
    }

    /// Whether the newest dispatched request is still outstanding.
    pub fn is_pending(&self) -> bool {
        match (self.newest_dispatched, &self.current) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(newest), Some(current)) => current.stamp != newest,
        }
    }
}

impl<T> Default for LatestWins<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery(stamp: u64, day_offset: i32) -> Delivery<&'static str> {
        Delivery {
            stamp: Stamp(stamp),
            day_offset,
            result: if day_offset == 0 { "today" } else { "yesterday" },
        }
    }

    #[test]
    fn newest_wins_when_it_completes_first() {
        let mut latest = LatestWins::new();
        latest.dispatched(Stamp(1)); // offset -1
        latest.dispatched(Stamp(2)); // offset 0

        assert_eq!(latest.offer(delivery(2, 0)), Offer::Accepted);
        assert_eq!(latest.offer(delivery(1, -1)), Offer::Stale);

        let current = latest.current().unwrap();
        assert_eq!(current.day_offset, 0);
        assert_eq!(current.result, "today");
    }

    #[test]
    fn newest_wins_when_it_completes_last() {
        let mut latest = LatestWins::new();
        latest.dispatched(Stamp(1)); // offset 0
        latest.dispatched(Stamp(2)); // offset -1

        assert_eq!(latest.offer(delivery(1, 0)), Offer::Stale);
        assert!(latest.current().is_none());
        assert!(latest.is_pending());

        assert_eq!(latest.offer(delivery(2, -1)), Offer::Accepted);
        assert_eq!(latest.current().unwrap().day_offset, -1);
        assert!(!latest.is_pending());
    }

    #[test]
    fn older_result_cannot_replace_accepted_one() {
        let mut latest = LatestWins::new();
        latest.dispatched(Stamp(1));
        assert_eq!(latest.offer(delivery(1, -1)), Offer::Accepted);

        latest.dispatched(Stamp(2));
        assert!(latest.is_pending());
        assert_eq!(latest.offer(delivery(2, 0)), Offer::Accepted);

        // A duplicate or replayed old delivery is still stale
        assert_eq!(latest.offer(delivery(1, -1)), Offer::Stale);
        assert_eq!(latest.current().unwrap().stamp, Stamp(2));
    }

    #[test]
    fn out_of_order_dispatch_notice_keeps_newest() {
        let mut latest: LatestWins<&str> = LatestWins::new();
        latest.dispatched(Stamp(3));
        latest.dispatched(Stamp(2));

        assert_eq!(latest.offer(delivery(2, 0)), Offer::Stale);
        assert_eq!(latest.offer(delivery(3, 0)), Offer::Accepted);
    }

    #[test]
    fn undispatched_delivery_is_stale() {
        let mut latest = LatestWins::new();
        assert!(!latest.is_pending());
        assert_eq!(latest.offer(delivery(1, 0)), Offer::Stale);
    }
}
