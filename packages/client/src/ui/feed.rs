//! Review list with optimistic inserts.
//!
//! A just-submitted review is shown at the top immediately. The next
//! authoritative fetch replaces the whole list; pending entries are never
//! merged into it.

use std::sync::Arc;

use review_common::Review;
use uuid::Uuid;

use super::Reducer;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feed {
    reviews: Arc<Vec<Review>>,
    pending: Vec<Uuid>,
    revalidating: bool,
    error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FeedEvent {
    /// Show a review before the server list includes it.
    Optimistic(Review),
    /// A fetch was started to reconcile with the server.
    Revalidate,
    /// Authoritative list from the server.
    Loaded(Arc<Vec<Review>>),
    /// A fetch failed. The current list stays on screen.
    LoadFailed(String),
}

impl Feed {
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn is_pending(&self, id: &Uuid) -> bool {
        self.pending.contains(id)
    }

    pub fn is_revalidating(&self) -> bool {
        self.revalidating
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Reducer for Feed {
    type Event = FeedEvent;

    fn update(self, event: FeedEvent) -> Self {
        match event {
            FeedEvent::Optimistic(review) => {
                let mut pending = self.pending;
                pending.push(review.id);
                let mut reviews = Vec::with_capacity(self.reviews.len() + 1);
                reviews.push(review);
                reviews.extend(self.reviews.iter().cloned());
                Self {
                    reviews: Arc::new(reviews),
                    pending,
                    ..self
                }
            }
            FeedEvent::Revalidate => Self {
                revalidating: true,
                ..self
            },
            FeedEvent::Loaded(reviews) => Self {
                reviews,
                pending: Vec::new(),
                revalidating: false,
                error: None,
            },
            FeedEvent::LoadFailed(message) => Self {
                revalidating: false,
                error: Some(message),
                ..self
            },
        }
    }
}
