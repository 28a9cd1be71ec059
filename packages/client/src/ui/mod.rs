//! State machines behind the review pages.
//!
//! Each piece of page state is a plain value with a pure reducer. Time is
//! never read from a clock inside a reducer; events that depend on it carry
//! an `Instant`, which keeps timers testable.

pub mod carousel;
pub mod countdown;
pub mod dashboard;
pub mod feed;
pub mod form;
pub mod pagination;
pub mod session;

pub use carousel::{Carousel, CarouselEvent};
pub use countdown::{CloseReason, Countdown, CountdownEvent};
pub use dashboard::{Dashboard, DashboardEvent};
pub use feed::{Feed, FeedEvent};
pub use form::{FormEvent, FormFields, MobileEdit, MobileForm, ReviewForm, StandardEdit, StandardForm};
pub use pagination::{LoadMore, PaginationEvent};
pub use session::{GateAction, SessionStatus};

/// `(state, event) -> state`.
pub trait Reducer: Sized {
    type Event;

    fn update(self, event: Self::Event) -> Self;

    /// True while a request started by this state has not come back yet.
    fn in_flight(&self) -> bool {
        false
    }
}
