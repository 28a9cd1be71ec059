//! Typed wrapper over the review REST API.
//!
//! All calls are single attempts. Payloads are validated locally first, and
//! a payload that fails validation never reaches the network.

use reqwest::{Client, RequestBuilder, StatusCode};
use review_common::{
    CreateMobileReviewRequest, CreateReviewRequest, Review, ReviewAnalytics, ValidationError,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::error::ClientError;

/// Which review list to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReviewScope {
    /// Every review, public.
    All,
    /// The signed-in user's reviews.
    Mine,
    /// Mobile shop reviews with their extended fields, public.
    Mobile,
}

impl ReviewScope {
    pub fn path(&self) -> &'static str {
        match self {
            Self::All => "all-reviews",
            Self::Mine => "reviews",
            Self::Mobile => "mobile-reviews",
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// A review ready to submit, in one of the two form shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum NewReview {
    Standard(CreateReviewRequest),
    Mobile(CreateMobileReviewRequest),
}

impl NewReview {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Standard(_) => ReviewScope::Mine.path(),
            Self::Mobile(_) => ReviewScope::Mobile.path(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Standard(req) => req.validate(),
            Self::Mobile(req) => req.validate(),
        }
    }

    pub fn normalized(self) -> Self {
        match self {
            Self::Standard(req) => Self::Standard(req.normalized()),
            Self::Mobile(req) => Self::Mobile(req.normalized()),
        }
    }
}

impl From<CreateReviewRequest> for NewReview {
    fn from(req: CreateReviewRequest) -> Self {
        Self::Standard(req)
    }
}

impl From<CreateMobileReviewRequest> for NewReview {
    fn from(req: CreateMobileReviewRequest) -> Self {
        Self::Mobile(req)
    }
}

/// The account behind the current session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    pub id: i32,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: SessionUser,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the review API rooted at `/api/v1`.
#[derive(Clone, Debug)]
pub struct ReviewClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl ReviewClient {
    /// `base_url` is the API root, e.g. `http://localhost:3000/api/v1`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn sign_out(&mut self) {
        self.token = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    /// Fetch one of the review lists, newest first.
    #[instrument(skip(self))]
    pub async fn list_reviews(&self, scope: ReviewScope) -> Result<Vec<Review>, ClientError> {
        let mut req = self.http.get(self.endpoint(scope.path())?);
        if scope.requires_session() {
            req = req.bearer_auth(self.bearer()?);
        } else if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let reviews: Vec<Review> = send(req).await?;
        debug!(count = reviews.len(), "Fetched reviews");
        Ok(reviews)
    }

    /// Validate and submit a review. Requires a session.
    #[instrument(skip_all, fields(path = review.path()))]
    pub async fn create_review(&self, review: NewReview) -> Result<Review, ClientError> {
        let review = review.normalized();
        review.validate()?;
        let token = self.bearer()?;

        let req = self
            .http
            .post(self.endpoint(review.path())?)
            .bearer_auth(token);
        let req = match &review {
            NewReview::Standard(body) => req.json(body),
            NewReview::Mobile(body) => req.json(body),
        };
        let created: Review = send(req).await?;
        debug!(review_id = %created.id, "Review submitted");
        Ok(created)
    }

    /// Dashboard summary computed by the server over mobile reviews.
    #[instrument(skip(self))]
    pub async fn mobile_analytics(&self) -> Result<ReviewAnalytics, ClientError> {
        send(self.http.get(self.endpoint("mobile-reviews/analytics")?)).await
    }

    #[instrument(skip(self, password))]
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<SessionUser, ClientError> {
        let req = self
            .http
            .post(self.endpoint("auth/register")?)
            .json(&Credentials {
                email,
                password,
                name,
            });
        send(req).await
    }

    /// Sign in and keep the returned bearer token for later calls.
    #[instrument(skip(self, password))]
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<SessionUser, ClientError> {
        let req = self
            .http
            .post(self.endpoint("auth/login")?)
            .json(&Credentials {
                email,
                password,
                name: None,
            });
        let LoginResponse { token, user } = send(req).await?;
        self.token = Some(token);
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<SessionUser, ClientError> {
        let req = self
            .http
            .get(self.endpoint("auth/me")?)
            .bearer_auth(self.bearer()?);
        send(req).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    fn bearer(&self) -> Result<&str, ClientError> {
        self.token.as_deref().ok_or(ClientError::Unauthenticated)
    }
}

async fn send<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, ClientError> {
    let res = req.send().await?;
    let status = res.status();
    let body = res.bytes().await?;

    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            message: error_message(status, &body),
        });
    }

    serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

/// The server's `error` text when present, otherwise a generic message.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}
