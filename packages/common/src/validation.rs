//! Field rules shared by the submission forms and the API.
//!
//! The client runs these before issuing a request; the server runs them again
//! on every create.

use thiserror::Error;
use url::Url;

use crate::analytics::UNSPECIFIED;
use crate::review::{CreateMobileReviewRequest, CreateReviewRequest};

pub const MAX_PRODUCT_NAME_LEN: usize = 200;
pub const MAX_SHORT_TEXT_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 5000;
pub const MAX_URL_LEN: usize = 2048;
pub const MIN_STARS: i32 = 1;
pub const MAX_STARS: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product name is required")]
    MissingProductName,

    #[error("Star rating is required")]
    MissingStars,

    #[error("Star rating must be between 1 and 5, got {0}")]
    StarsOutOfRange(i32),

    #[error("Product type is required")]
    MissingProductType,

    #[error("\"{0}\" is not a valid product type")]
    ReservedProductType(String),

    #[error("Product quality is required")]
    MissingProductQuality,

    #[error("Service quality is required")]
    MissingServiceQuality,

    #[error("Please say whether you would recommend us")]
    MissingRecommendation,

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be a valid http or https URL")]
    InvalidUrl { field: &'static str },
}

/// Trim a free-text field, mapping blank input to `None`.
///
/// The forms post empty strings for untouched optional inputs.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn validate_stars(stars: Option<i32>) -> Result<i32, ValidationError> {
    let stars = stars.ok_or(ValidationError::MissingStars)?;
    if !(MIN_STARS..=MAX_STARS).contains(&stars) {
        return Err(ValidationError::StarsOutOfRange(stars));
    }
    Ok(stars)
}

fn validate_product_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingProductName);
    }
    check_len("Product name", Some(name), MAX_PRODUCT_NAME_LEN)
}

fn check_len(field: &'static str, value: Option<&str>, max: usize) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.trim().chars().count() > max => Err(ValidationError::TooLong { field, max }),
        _ => Ok(()),
    }
}

fn check_url(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(());
    };
    check_len(field, Some(raw), MAX_URL_LEN)?;
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ValidationError::InvalidUrl { field }),
    }
}

impl CreateReviewRequest {
    /// Check required fields and value ranges.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_product_name(&self.product_name)?;
        validate_stars(self.stars)?;
        check_len(
            "Description",
            self.description.as_deref(),
            MAX_DESCRIPTION_LEN,
        )?;
        check_url("Image URL", self.image_url.as_deref())?;
        check_url("Bought from URL", self.bought_from_url.as_deref())?;
        Ok(())
    }

    /// Trimmed copy with blank optional fields dropped.
    pub fn normalized(self) -> Self {
        Self {
            product_name: self.product_name.trim().to_string(),
            stars: self.stars,
            description: normalize_optional(self.description),
            image_url: normalize_optional(self.image_url),
            bought_from_url: normalize_optional(self.bought_from_url),
        }
    }
}

impl CreateMobileReviewRequest {
    /// Check required fields and value ranges.
    ///
    /// Fields are checked in form order, so the first error names the
    /// topmost missing answer.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_len(
            "Customer name",
            self.customer_name.as_deref(),
            MAX_SHORT_TEXT_LEN,
        )?;
        check_len(
            "Mobile number",
            self.mobile_number.as_deref(),
            MAX_SHORT_TEXT_LEN,
        )?;
        if self
            .product_type
            .as_deref()
            .is_none_or(|t| t.trim().is_empty())
        {
            return Err(ValidationError::MissingProductType);
        }
        check_len(
            "Product type",
            self.product_type.as_deref(),
            MAX_SHORT_TEXT_LEN,
        )?;
        // Analytics counts reviews without a type under this key.
        if let Some(t) = self
            .product_type
            .as_deref()
            .map(str::trim)
            .filter(|t| t.eq_ignore_ascii_case(UNSPECIFIED))
        {
            return Err(ValidationError::ReservedProductType(t.to_string()));
        }
        validate_product_name(&self.product_name)?;
        validate_stars(self.stars)?;
        if self.product_quality.is_none() {
            return Err(ValidationError::MissingProductQuality);
        }
        if self.service_quality.is_none() {
            return Err(ValidationError::MissingServiceQuality);
        }
        if self.would_recommend.is_none() {
            return Err(ValidationError::MissingRecommendation);
        }
        check_len(
            "Description",
            self.description.as_deref(),
            MAX_DESCRIPTION_LEN,
        )?;
        check_url("Image URL", self.image_url.as_deref())?;
        Ok(())
    }

    /// Trimmed copy with blank optional fields dropped.
    pub fn normalized(self) -> Self {
        Self {
            customer_name: normalize_optional(self.customer_name),
            mobile_number: normalize_optional(self.mobile_number),
            product_type: normalize_optional(self.product_type),
            product_name: self.product_name.trim().to_string(),
            description: normalize_optional(self.description),
            image_url: normalize_optional(self.image_url),
            ..self
        }
    }
}
