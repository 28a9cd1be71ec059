//! Analytics dashboard state.
//!
//! Holds the current collection and its summary. The summary is recomputed
//! only when a different collection arrives, and only if it has rows. A
//! restarted poller reuses generation numbers, so the list identity is
//! compared too.

use std::sync::Arc;

use review_common::{Review, ReviewAnalytics, aggregate};

use super::Reducer;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    generation: u64,
    reviews: Arc<Vec<Review>>,
    analytics: Option<ReviewAnalytics>,
    computed_for: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardEvent {
    Loaded {
        generation: u64,
        reviews: Arc<Vec<Review>>,
    },
}

impl Dashboard {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn count(&self) -> usize {
        self.reviews.len()
    }

    /// `None` until a non-empty collection has been summarised.
    pub fn analytics(&self) -> Option<&ReviewAnalytics> {
        self.analytics.as_ref()
    }

    /// Generation the current summary was computed from.
    pub fn computed_for(&self) -> Option<u64> {
        self.computed_for
    }
}

impl Reducer for Dashboard {
    type Event = DashboardEvent;

    fn update(self, event: DashboardEvent) -> Self {
        match event {
            DashboardEvent::Loaded {
                generation,
                reviews,
            } => {
                if generation == self.generation && Arc::ptr_eq(&reviews, &self.reviews) {
                    return self;
                }
                let (analytics, computed_for) = if reviews.is_empty() {
                    (None, None)
                } else {
                    (Some(aggregate(&reviews)), Some(generation))
                };
                Self {
                    generation,
                    reviews,
                    analytics,
                    computed_for,
                }
            }
        }
    }
}

impl From<crate::poller::ReviewSnapshot> for DashboardEvent {
    fn from(snapshot: crate::poller::ReviewSnapshot) -> Self {
        Self::Loaded {
            generation: snapshot.generation,
            reviews: snapshot.reviews,
        }
    }
}
