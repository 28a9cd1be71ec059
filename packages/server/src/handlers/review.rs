use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use review_common::{
    CreateMobileReviewRequest, CreateReviewRequest, Review, ReviewAnalytics, ReviewKind,
    ReviewUser, aggregate,
};
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{review, user};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::review::{new_mobile_review, new_standard_review, to_review};
use crate::state::AppState;

/// Load reviews matching `filter`, newest first, with their authors.
async fn find_reviews<C: ConnectionTrait>(
    db: &C,
    filter: Condition,
) -> Result<Vec<Review>, AppError> {
    let rows = review::Entity::find()
        .filter(filter)
        .find_also_related(user::Entity)
        .order_by_desc(review::Column::CreatedAt)
        .order_by_desc(review::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(model, author)| to_review(model, author))
        .collect())
}

/// Attach the caller's profile to a freshly inserted row without re-querying.
fn with_author(model: review::Model, auth_user: AuthUser) -> Review {
    let mut review = to_review(model, None);
    review.user = Some(ReviewUser {
        id: auth_user.user_id,
        name: auth_user.name,
        email: auth_user.email,
    });
    review
}

#[utoipa::path(
    get,
    path = "/all-reviews",
    tag = "Reviews",
    operation_id = "listAllReviews",
    summary = "List every review",
    description = "Public endpoint. Returns all reviews of both shapes, newest first, each with its author's id, name and email.",
    responses(
        (status = 200, description = "All reviews", body = Vec<Review>),
        (status = 500, description = "Internal error (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_all_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = find_reviews(&state.db, Condition::all()).await?;
    Ok(Json(reviews))
}

#[utoipa::path(
    get,
    path = "/reviews",
    tag = "Reviews",
    operation_id = "listMyReviews",
    summary = "List the caller's reviews",
    description = "Returns reviews submitted by the signed-in user, newest first.",
    responses(
        (status = 200, description = "The caller's reviews", body = Vec<Review>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn list_my_reviews(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = find_reviews(
        &state.db,
        Condition::all().add(review::Column::UserId.eq(auth_user.user_id)),
    )
    .await?;
    Ok(Json(reviews))
}

#[utoipa::path(
    post,
    path = "/reviews",
    tag = "Reviews",
    operation_id = "createReview",
    summary = "Submit a review",
    description = "Creates a standard review owned by the caller. `productName` and `stars` (1-5) are required; blank optional fields are stored as null.",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = auth_user.user_id))]
pub async fn create_review(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let model = new_standard_review(payload, auth_user.user_id, chrono::Utc::now())
        .insert(&state.db)
        .await?;

    info!(review_id = %model.id, "Review created");

    Ok((StatusCode::CREATED, Json(with_author(model, auth_user))))
}

#[utoipa::path(
    get,
    path = "/mobile-reviews",
    tag = "Mobile Reviews",
    operation_id = "listMobileReviews",
    summary = "List mobile shop reviews",
    description = "Public endpoint. Returns reviews submitted through the mobile shop form, including product type, quality grades and recommendation, newest first.",
    responses(
        (status = 200, description = "Mobile shop reviews", body = Vec<Review>),
        (status = 500, description = "Internal error (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_mobile_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = find_reviews(
        &state.db,
        Condition::all().add(review::Column::Kind.eq(ReviewKind::Mobile)),
    )
    .await?;
    Ok(Json(reviews))
}

#[utoipa::path(
    post,
    path = "/mobile-reviews",
    tag = "Mobile Reviews",
    operation_id = "createMobileReview",
    summary = "Submit a mobile shop review",
    description = "Creates a mobile shop review owned by the caller. In addition to `productName` and `stars`, `productType`, `productQuality`, `serviceQuality` and `wouldRecommend` are required.",
    request_body = CreateMobileReviewRequest,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = auth_user.user_id))]
pub async fn create_mobile_review(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateMobileReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let model = new_mobile_review(payload, auth_user.user_id, chrono::Utc::now())
        .insert(&state.db)
        .await?;

    info!(review_id = %model.id, "Mobile review created");

    Ok((StatusCode::CREATED, Json(with_author(model, auth_user))))
}

#[utoipa::path(
    get,
    path = "/mobile-reviews/analytics",
    tag = "Mobile Reviews",
    operation_id = "getMobileReviewAnalytics",
    summary = "Dashboard summary of mobile shop reviews",
    description = "Average rating, recommendation rate and product type / quality distributions. `averageRating` and `recommendationRate` are null when there are no reviews.",
    responses(
        (status = 200, description = "Summary statistics", body = ReviewAnalytics),
        (status = 500, description = "Internal error (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_mobile_review_analytics(
    State(state): State<AppState>,
) -> Result<Json<ReviewAnalytics>, AppError> {
    let reviews = find_reviews(
        &state.db,
        Condition::all().add(review::Column::Kind.eq(ReviewKind::Mobile)),
    )
    .await?;
    Ok(Json(aggregate(&reviews)))
}
