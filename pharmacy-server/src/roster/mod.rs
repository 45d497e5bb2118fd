//! Stamped roster requests with explicit result delivery.
//!
//! A map front end fires a new roster request on every day change or
//! foreground event without cancelling the previous one. [`RosterFeed`]
//! stamps each request, runs it on the tokio runtime, and sends the result
//! to the caller's own channel. The caller feeds those deliveries into a
//! [`LatestRoster`], which keeps only the newest request's result.

mod latest;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::fetch::FetchError;
use crate::pharmacy::{PharmacyClient, PharmacyList};

pub use latest::{Delivery, LatestWins, Offer, Stamp};

/// A roster fetch result tagged with its request stamp.
pub type RosterDelivery = Delivery<Result<PharmacyList, FetchError>>;

/// Latest-dispatched-wins holder for roster results.
pub type LatestRoster = LatestWins<Result<PharmacyList, FetchError>>;

/// Issues roster requests and delivers results on the caller's context.
#[derive(Debug, Clone)]
pub struct RosterFeed {
    client: PharmacyClient,
    next_stamp: Arc<AtomicU64>,
    deliver_on: mpsc::UnboundedSender<RosterDelivery>,
}

impl RosterFeed {
    /// Create a feed that delivers every completed request to `deliver_on`.
    pub fn new(client: PharmacyClient, deliver_on: mpsc::UnboundedSender<RosterDelivery>) -> Self {
        Self {
            client,
            next_stamp: Arc::new(AtomicU64::new(0)),
            deliver_on,
        }
    }

    /// Create a feed together with the receiving end of its delivery channel.
    pub fn channel(client: PharmacyClient) -> (Self, mpsc::UnboundedReceiver<RosterDelivery>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(client, tx), rx)
    }

    /// Dispatch one roster request for `day_offset` and return its stamp.
    ///
    /// Must be called from within a tokio runtime. The request always runs
    /// to completion; if the receiver has gone away the result is dropped.
    pub fn request(&self, day_offset: i32) -> Stamp {
        let stamp = Stamp(self.next_stamp.fetch_add(1, Ordering::Relaxed) + 1);
        debug!(?stamp, day_offset, "dispatching roster request");

        let client = self.client.clone();
        let deliver_on = self.deliver_on.clone();

        tokio::spawn(async move {
            let result = client.fetch_pharmacy_list(day_offset).await;
            let delivery = Delivery {
                stamp,
                day_offset,
                result,
            };

            if deliver_on.send(delivery).is_err() {
                trace!(?stamp, "delivery receiver closed, dropping result");
            }
        });

        stamp
    }

    /// Dispatch a request and record it in `latest` in one step.
    pub fn request_into(&self, day_offset: i32, latest: &mut LatestRoster) -> Stamp {
        let stamp = self.request(day_offset);
        latest.dispatched(stamp);
        stamp
    }
}
