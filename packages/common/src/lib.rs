pub mod analytics;
pub mod quality;
pub mod review;
pub mod validation;

pub use analytics::{ReviewAnalytics, aggregate};
pub use quality::Quality;
pub use review::{CreateMobileReviewRequest, CreateReviewRequest, Review, ReviewKind, ReviewUser};
pub use validation::ValidationError;
