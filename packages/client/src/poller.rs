//! Periodic re-fetch of a review list.

use std::sync::Arc;
use std::time::Duration;

use review_common::Review;
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::api::{ReviewClient, ReviewScope};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);
/// Shorter intervals, including zero, are raised to this.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// The last successfully fetched list.
///
/// `generation` increases by one for every successful fetch, so consumers can
/// tell a new collection from the one they already processed.
#[derive(Clone, Debug, Default)]
pub struct ReviewSnapshot {
    pub generation: u64,
    pub reviews: Arc<Vec<Review>>,
}

impl ReviewSnapshot {
    /// True until the first fetch succeeds.
    pub fn is_pending(&self) -> bool {
        self.generation == 0
    }
}

/// Background task that fetches `scope` immediately and then on every
/// interval, publishing each result on a watch channel.
///
/// A failed fetch is logged and the previous snapshot stays published.
/// Dropping the poller stops the task.
pub struct ReviewPoller {
    rx: watch::Receiver<ReviewSnapshot>,
    refresh: Arc<Notify>,
    handle: JoinHandle<()>,
}

impl ReviewPoller {
    pub fn spawn(client: ReviewClient, scope: ReviewScope, interval: Duration) -> Self {
        if interval < MIN_POLL_INTERVAL {
            warn!(?interval, min = ?MIN_POLL_INTERVAL, "Poll interval too short, clamping");
        }
        let interval = interval.max(MIN_POLL_INTERVAL);
        let (tx, rx) = watch::channel(ReviewSnapshot::default());
        let refresh = Arc::new(Notify::new());
        let handle = tokio::spawn(poll_loop(client, scope, interval, tx, refresh.clone()));
        Self {
            rx,
            refresh,
            handle,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ReviewSnapshot> {
        self.rx.clone()
    }

    pub fn latest(&self) -> ReviewSnapshot {
        self.rx.borrow().clone()
    }

    /// Fetch again now without waiting for the next tick.
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }
}

impl Drop for ReviewPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn poll_loop(
    client: ReviewClient,
    scope: ReviewScope,
    interval: Duration,
    tx: watch::Sender<ReviewSnapshot>,
    refresh: Arc<Notify>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut generation = 0u64;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = refresh.notified() => {
                ticker.reset();
            }
        }

        match client.list_reviews(scope).await {
            Ok(reviews) => {
                generation += 1;
                debug!(?scope, generation, count = reviews.len(), "Poll succeeded");
                tx.send_replace(ReviewSnapshot {
                    generation,
                    reviews: Arc::new(reviews),
                });
            }
            Err(e) => {
                warn!(?scope, error = %e, "Poll failed, keeping previous snapshot");
            }
        }
    }
}
