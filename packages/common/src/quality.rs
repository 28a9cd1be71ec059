#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Four-step quality grade used for both product and service questions.
///
/// When the `sea-orm` feature is enabled, this enum can be used directly in SeaORM entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
pub enum Quality {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Excellent"))]
    Excellent,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Good"))]
    Good,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Average"))]
    Average,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Poor"))]
    Poor,
}

impl Quality {
    /// All grades, best first. This is the order the forms present them in.
    pub const ALL: &'static [Quality] = &[Self::Excellent, Self::Good, Self::Average, Self::Poor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown quality grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseQualityError {
    invalid: String,
}

impl fmt::Display for ParseQualityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid quality '{}'. Valid values: {}",
            self.invalid,
            Quality::ALL
                .iter()
                .map(|q| q.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseQualityError {}

impl FromStr for Quality {
    type Err = ParseQualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Excellent" => Ok(Self::Excellent),
            "Good" => Ok(Self::Good),
            "Average" => Ok(Self::Average),
            "Poor" => Ok(Self::Poor),
            _ => Err(ParseQualityError {
                invalid: s.to_string(),
            }),
        }
    }
}
