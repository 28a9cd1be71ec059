//! Client side of the review service: a typed HTTP fetch layer, a polling
//! loop that keeps a review list fresh, and the state machines behind the
//! review pages.

pub mod api;
pub mod error;
pub mod poller;
pub mod ui;

pub use api::{NewReview, ReviewClient, ReviewScope, SessionUser};
pub use error::ClientError;
pub use poller::{ReviewPoller, ReviewSnapshot};
