use chrono::{DateTime, Utc};
use review_common::{
    CreateMobileReviewRequest, CreateReviewRequest, Review, ReviewKind, ReviewUser,
};
use sea_orm::{NotSet, Set};
use uuid::Uuid;

use crate::entity::{review, user};

/// Build the wire representation from a review row and its (optional) author.
pub fn to_review(model: review::Model, author: Option<user::Model>) -> Review {
    Review {
        id: model.id,
        product_name: model.product_name,
        stars: model.stars,
        product_type: model.product_type,
        product_quality: model.product_quality,
        service_quality: model.service_quality,
        would_recommend: model.would_recommend,
        customer_name: model.customer_name,
        mobile_number: model.mobile_number,
        description: model.description,
        image_url: model.image_url,
        bought_from_url: model.bought_from_url,
        kind: model.kind,
        created_at: model.created_at,
        updated_at: model.updated_at,
        user: author.map(|u| ReviewUser {
            id: u.id,
            name: u.name,
            email: u.email,
        }),
    }
}

/// Insertable row for a standard review. The payload must already be
/// validated and normalized.
pub fn new_standard_review(
    payload: CreateReviewRequest,
    user_id: i32,
    now: DateTime<Utc>,
) -> review::ActiveModel {
    review::ActiveModel {
        id: Set(Uuid::now_v7()),
        product_name: Set(payload.product_name),
        stars: Set(payload.stars),
        kind: Set(ReviewKind::Standard),
        product_type: Set(None),
        product_quality: Set(None),
        service_quality: Set(None),
        would_recommend: Set(None),
        customer_name: Set(None),
        mobile_number: Set(None),
        description: Set(payload.description),
        image_url: Set(payload.image_url),
        bought_from_url: Set(payload.bought_from_url),
        user_id: Set(Some(user_id)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

/// Insertable row for a mobile shop review. The payload must already be
/// validated and normalized.
pub fn new_mobile_review(
    payload: CreateMobileReviewRequest,
    user_id: i32,
    now: DateTime<Utc>,
) -> review::ActiveModel {
    review::ActiveModel {
        id: Set(Uuid::now_v7()),
        product_name: Set(payload.product_name),
        stars: Set(payload.stars),
        kind: Set(ReviewKind::Mobile),
        product_type: Set(payload.product_type),
        product_quality: Set(payload.product_quality),
        service_quality: Set(payload.service_quality),
        would_recommend: Set(payload.would_recommend),
        customer_name: Set(payload.customer_name),
        mobile_number: Set(payload.mobile_number),
        description: Set(payload.description),
        image_url: Set(payload.image_url),
        bought_from_url: NotSet,
        user_id: Set(Some(user_id)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}
