//! Summary statistics over a review collection.
//!
//! [`aggregate`] is a pure single pass. Callers recompute it whenever the
//! collection they hold is replaced; the result is never patched in place.

use serde::{Deserialize, Serialize};

use crate::review::Review;

/// Key used for records that leave a distributed field unset.
pub const UNSPECIFIED: &str = "Unspecified";

/// One bucket of a [`Distribution`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DistributionEntry {
    #[schema(example = "Mobile Phone")]
    pub key: String,
    #[schema(example = 12)]
    pub count: u64,
}

/// Occurrence counts keyed by value, in first-seen order.
///
/// Keys are discovered from the data rather than from a fixed enumeration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
pub struct Distribution(Vec<DistributionEntry>);

impl Distribution {
    fn record(&mut self, key: &str) {
        match self.0.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.count += 1,
            None => self.0.push(DistributionEntry {
                key: key.to_string(),
                count: 1,
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.0.iter().find(|e| e.key == key).map(|e| e.count)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DistributionEntry> {
        self.0.iter()
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|e| e.count).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct QualityDistribution {
    pub product: Distribution,
    pub service: Distribution,
}

/// Dashboard summary of a review collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnalytics {
    #[schema(example = 3)]
    pub total_count: u64,
    /// Mean star rating, unrounded. Null when there are no reviews.
    #[schema(example = 4.0)]
    pub average_rating: Option<f64>,
    /// Percentage (0-100) of reviews that would recommend, unrounded.
    /// Null when there are no reviews.
    #[schema(example = 66.66666666666667)]
    pub recommendation_rate: Option<f64>,
    pub product_type_distribution: Distribution,
    pub quality_distribution: QualityDistribution,
}

impl ReviewAnalytics {
    /// True when the averages were computed, i.e. the input was non-empty.
    pub fn is_computed(&self) -> bool {
        self.average_rating.is_some()
    }
}

/// Compute the dashboard summary in one pass.
///
/// An empty input skips the reduction entirely: `total_count` is 0 and the
/// average and rate stay `None`. A review without a star rating adds 0 to
/// the rating sum but still counts toward the denominator.
pub fn aggregate(reviews: &[Review]) -> ReviewAnalytics {
    let count = reviews.len();
    if count == 0 {
        return ReviewAnalytics::default();
    }

    let mut rating_sum: i64 = 0;
    let mut recommended: u64 = 0;
    let mut product_types = Distribution::default();
    let mut product_quality = Distribution::default();
    let mut service_quality = Distribution::default();

    for review in reviews {
        rating_sum += i64::from(review.stars.unwrap_or(0));
        if review.would_recommend == Some(true) {
            recommended += 1;
        }
        product_types.record(
            review
                .product_type
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(UNSPECIFIED),
        );
        product_quality.record(review.product_quality.map_or(UNSPECIFIED, |q| q.as_str()));
        service_quality.record(review.service_quality.map_or(UNSPECIFIED, |q| q.as_str()));
    }

    let total = count as f64;
    ReviewAnalytics {
        total_count: count as u64,
        average_rating: Some(rating_sum as f64 / total),
        recommendation_rate: Some(recommended as f64 / total * 100.0),
        product_type_distribution: product_types,
        quality_distribution: QualityDistribution {
            product: product_quality,
            service: service_quality,
        },
    }
}

/// Render an average rating with one decimal, e.g. `4.3`.
pub fn format_rating(value: f64) -> String {
    format!("{value:.1}")
}

/// Render a percentage with one decimal, e.g. `66.7%`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}
