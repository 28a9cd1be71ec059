#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::quality::Quality;

/// Which submission form produced a review.
///
/// Both shapes share one table; the mobile shop form fills the extended
/// quality and recommendation columns.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
pub enum ReviewKind {
    #[default]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Standard"))]
    Standard,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Mobile"))]
    Mobile,
}

impl ReviewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Mobile => "Mobile",
        }
    }
}

impl fmt::Display for ReviewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public profile of the user who submitted a review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewUser {
    #[schema(example = 42)]
    pub id: i32,
    /// Display name, if the user set one.
    #[schema(example = "Alice")]
    #[serde(default)]
    pub name: Option<String>,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// A persisted review as returned by every list and create endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[schema(example = "01929b6e-6f1c-7cc3-9d1e-3c2a1b0f4e55")]
    pub id: Uuid,
    #[schema(example = "iPhone 15")]
    pub product_name: String,
    /// Star rating 1-5. Absent only for legacy rows.
    #[schema(example = 5)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<i32>,
    #[schema(example = "Mobile Phone")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_quality: Option<Quality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_quality: Option<Quality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub would_recommend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schema(example = "https://example.com/photo.jpg")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[schema(example = "https://shop.example.com/iphone-15")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bought_from_url: Option<String>,
    #[serde(default)]
    pub kind: ReviewKind,
    #[schema(example = "2025-10-01T14:30:00Z")]
    pub created_at: DateTime<Utc>,
    #[schema(example = "2025-10-01T14:30:00Z")]
    pub updated_at: DateTime<Utc>,
    /// Submitting user. Null when the account no longer exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ReviewUser>,
}

/// Request body for the standard "add a review" form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    /// Required, 1-200 characters after trimming.
    #[schema(example = "Kindle Paperwhite")]
    pub product_name: String,
    /// Required, 1-5.
    #[schema(example = 4)]
    #[serde(default)]
    pub stars: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub bought_from_url: Option<String>,
}

/// Request body for the mobile shop experience form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMobileReviewRequest {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    /// Required. The form offers `Mobile Phone`, `Accessories`, `Repair Service`, `Other`.
    #[schema(example = "Repair Service")]
    #[serde(default)]
    pub product_type: Option<String>,
    #[schema(example = "Samsung screen repair")]
    pub product_name: String,
    #[schema(example = 5)]
    #[serde(default)]
    pub stars: Option<i32>,
    #[serde(default)]
    pub product_quality: Option<Quality>,
    #[serde(default)]
    pub service_quality: Option<Quality>,
    #[serde(default)]
    pub would_recommend: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Product categories offered by the mobile shop form.
pub const MOBILE_PRODUCT_TYPES: &[&str] = &["Mobile Phone", "Accessories", "Repair Service", "Other"];
