//! Review submission forms.

use std::time::{Duration, Instant};

use review_common::review::MOBILE_PRODUCT_TYPES;
use review_common::{CreateMobileReviewRequest, CreateReviewRequest, Quality, ValidationError};

use super::Reducer;
use crate::api::NewReview;

/// How long the "thank you" banner stays up after a successful submit.
pub const SUCCESS_BANNER: Duration = Duration::from_secs(3);
pub const DEFAULT_STARS: i32 = 5;

/// Field set behind one of the review forms.
pub trait FormFields: Clone + PartialEq {
    type Edit;

    /// Values a freshly opened or reset form starts with.
    fn blank() -> Self;

    fn apply(&mut self, edit: Self::Edit);

    fn into_new_review(self) -> NewReview;
}

#[derive(Clone, Debug, PartialEq)]
pub enum StandardEdit {
    ProductName(String),
    Stars(i32),
    Description(String),
    ImageUrl(String),
    BoughtFromUrl(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum MobileEdit {
    CustomerName(String),
    MobileNumber(String),
    ProductType(String),
    ProductName(String),
    Stars(i32),
    ProductQuality(Quality),
    ServiceQuality(Quality),
    WouldRecommend(bool),
    Description(String),
    ImageUrl(String),
}

impl FormFields for CreateReviewRequest {
    type Edit = StandardEdit;

    fn blank() -> Self {
        Self {
            stars: Some(DEFAULT_STARS),
            ..Default::default()
        }
    }

    fn apply(&mut self, edit: StandardEdit) {
        match edit {
            StandardEdit::ProductName(v) => self.product_name = v,
            StandardEdit::Stars(v) => self.stars = Some(v),
            StandardEdit::Description(v) => self.description = Some(v),
            StandardEdit::ImageUrl(v) => self.image_url = Some(v),
            StandardEdit::BoughtFromUrl(v) => self.bought_from_url = Some(v),
        }
    }

    fn into_new_review(self) -> NewReview {
        NewReview::Standard(self)
    }
}

impl FormFields for CreateMobileReviewRequest {
    type Edit = MobileEdit;

    fn blank() -> Self {
        Self {
            stars: Some(DEFAULT_STARS),
            ..Default::default()
        }
    }

    fn apply(&mut self, edit: MobileEdit) {
        match edit {
            MobileEdit::CustomerName(v) => self.customer_name = Some(v),
            MobileEdit::MobileNumber(v) => self.mobile_number = Some(v),
            MobileEdit::ProductType(v) => self.product_type = Some(v),
            MobileEdit::ProductName(v) => self.product_name = v,
            MobileEdit::Stars(v) => self.stars = Some(v),
            MobileEdit::ProductQuality(v) => self.product_quality = Some(v),
            MobileEdit::ServiceQuality(v) => self.service_quality = Some(v),
            MobileEdit::WouldRecommend(v) => self.would_recommend = Some(v),
            MobileEdit::Description(v) => self.description = Some(v),
            MobileEdit::ImageUrl(v) => self.image_url = Some(v),
        }
    }

    fn into_new_review(self) -> NewReview {
        NewReview::Mobile(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormEvent<E> {
    Edit(E),
    /// Validate locally and, if valid, enter the submitting state.
    Submit,
    Succeeded { now: Instant },
    Failed(String),
    Tick { now: Instant },
    Reset,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewForm<P> {
    fields: P,
    submitting: bool,
    error: Option<String>,
    success_until: Option<Instant>,
}

pub type StandardForm = ReviewForm<CreateReviewRequest>;
pub type MobileForm = ReviewForm<CreateMobileReviewRequest>;

impl MobileForm {
    /// Choices for the product type picker, in display order.
    pub fn product_type_options() -> &'static [&'static str] {
        MOBILE_PRODUCT_TYPES
    }
}

impl<P: FormFields> Default for ReviewForm<P> {
    fn default() -> Self {
        Self {
            fields: P::blank(),
            submitting: false,
            error: None,
            success_until: None,
        }
    }
}

impl<P: FormFields> ReviewForm<P> {
    pub fn fields(&self) -> &P {
        &self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Inline error text under the form.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn show_success(&self) -> bool {
        self.success_until.is_some()
    }

    /// The payload to send while the form is in the submitting state.
    pub fn submission(&self) -> Option<NewReview> {
        self.submitting
            .then(|| self.fields.clone().into_new_review().normalized())
    }

    fn check(&self) -> Result<(), ValidationError> {
        self.fields.clone().into_new_review().normalized().validate()
    }
}

impl<P: FormFields> Reducer for ReviewForm<P> {
    type Event = FormEvent<P::Edit>;

    fn update(mut self, event: Self::Event) -> Self {
        match event {
            FormEvent::Edit(edit) => {
                if !self.submitting {
                    self.fields.apply(edit);
                }
                self
            }
            FormEvent::Submit => {
                if self.submitting {
                    return self;
                }
                match self.check() {
                    Ok(()) => Self {
                        submitting: true,
                        error: None,
                        ..self
                    },
                    Err(e) => Self {
                        error: Some(e.to_string()),
                        ..self
                    },
                }
            }
            FormEvent::Succeeded { now } => Self {
                success_until: Some(now + SUCCESS_BANNER),
                ..Self::default()
            },
            FormEvent::Failed(message) => Self {
                submitting: false,
                error: Some(message),
                ..self
            },
            FormEvent::Tick { now } => {
                if self.success_until.is_some_and(|until| now >= until) {
                    self.success_until = None;
                }
                self
            }
            FormEvent::Reset => Self::default(),
        }
    }

    fn in_flight(&self) -> bool {
        self.submitting
    }
}
