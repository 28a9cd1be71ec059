use chrono::Utc;
use review_common::ReviewKind;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::json;
use uuid::Uuid;

use server::entity::review;

use crate::common::{TestApp, routes};

mod create {
    use super::*;

    #[tokio::test]
    async fn complete_mobile_review_is_stored_with_extended_fields() {
        let app = TestApp::spawn().await;
        let token = app.create_authenticated_user("dan@example.com", None).await;

        let body = app
            .create_mobile_review(&token, "Repair Service", 5, ("Excellent", "Good"), false)
            .await;

        assert_eq!(body["kind"], "Mobile");
        assert_eq!(body["productType"], "Repair Service");
        assert_eq!(body["productQuality"], "Excellent");
        assert_eq!(body["serviceQuality"], "Good");
        assert_eq!(body["wouldRecommend"], false);
        assert!(body.get("customerName").is_none());
    }

    #[tokio::test]
    async fn missing_quality_answer_is_rejected() {
        let app = TestApp::spawn().await;
        let token = app.create_authenticated_user("dan@example.com", None).await;

        let res = app
            .post_with_token(
                routes::MOBILE_REVIEWS,
                &json!({
                    "productType": "Mobile Phone",
                    "productName": "Pixel 9",
                    "stars": 4,
                    "productQuality": "Good",
                    "wouldRecommend": true,
                }),
                &token,
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "Service quality is required");
    }

    #[tokio::test]
    async fn unspecified_product_type_is_rejected() {
        let app = TestApp::spawn().await;
        let token = app.create_authenticated_user("dan@example.com", None).await;

        let res = app
            .post_with_token(
                routes::MOBILE_REVIEWS,
                &json!({
                    "productType": "Unspecified",
                    "productName": "Pixel 9",
                    "stars": 4,
                    "productQuality": "Good",
                    "serviceQuality": "Good",
                    "wouldRecommend": true,
                }),
                &token,
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn unknown_quality_grade_is_rejected() {
        let app = TestApp::spawn().await;
        let token = app.create_authenticated_user("dan@example.com", None).await;

        let res = app
            .post_with_token(
                routes::MOBILE_REVIEWS,
                &json!({
                    "productType": "Mobile Phone",
                    "productName": "Pixel 9",
                    "stars": 4,
                    "productQuality": "Superb",
                    "serviceQuality": "Good",
                    "wouldRecommend": true,
                }),
                &token,
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod list {
    use super::*;

    #[tokio::test]
    async fn only_mobile_reviews_are_listed() {
        let app = TestApp::spawn().await;
        let token = app.create_authenticated_user("dan@example.com", None).await;

        app.create_review(&token, "Standard one", 3).await;
        app.create_mobile_review(&token, "Accessories", 4, ("Good", "Average"), true)
            .await;

        let res = app.get_without_token(routes::MOBILE_REVIEWS).await;

        assert_eq!(res.status, 200);
        let items = res.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["kind"], "Mobile");
        assert_eq!(items[0]["user"]["email"], "dan@example.com");
    }
}

mod analytics {
    use super::*;

    #[tokio::test]
    async fn empty_collection_has_no_averages() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(routes::MOBILE_ANALYTICS).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["totalCount"], 0);
        assert!(res.body["averageRating"].is_null());
        assert!(res.body["recommendationRate"].is_null());
        assert_eq!(res.body["productTypeDistribution"], json!([]));
    }

    #[tokio::test]
    async fn summary_matches_submitted_reviews() {
        let app = TestApp::spawn().await;
        let token = app.create_authenticated_user("dan@example.com", None).await;

        app.create_mobile_review(&token, "Mobile Phone", 5, ("Excellent", "Good"), true)
            .await;
        app.create_mobile_review(&token, "Repair Service", 3, ("Average", "Good"), false)
            .await;
        app.create_mobile_review(&token, "Mobile Phone", 4, ("Excellent", "Poor"), true)
            .await;
        // Standard reviews are not part of the mobile dashboard.
        app.create_review(&token, "Kindle", 1).await;

        let res = app.get_without_token(routes::MOBILE_ANALYTICS).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["totalCount"], 3);
        assert_eq!(res.body["averageRating"], 4.0);
        let rate = res.body["recommendationRate"].as_f64().unwrap();
        assert!((rate - 200.0 / 3.0).abs() < 1e-9, "rate was {rate}");

        let types = res.body["productTypeDistribution"].as_array().unwrap();
        let total: u64 = types.iter().map(|e| e["count"].as_u64().unwrap()).sum();
        assert_eq!(total, 3);
        assert!(
            types
                .iter()
                .any(|e| e["key"] == "Mobile Phone" && e["count"] == 2)
        );

        let service = res.body["qualityDistribution"]["service"]
            .as_array()
            .unwrap();
        assert!(service.iter().any(|e| e["key"] == "Good" && e["count"] == 2));
    }

    #[tokio::test]
    async fn unrated_rows_pull_the_average_down() {
        let app = TestApp::spawn().await;
        let token = app.create_authenticated_user("dan@example.com", None).await;
        app.create_mobile_review(&token, "Other", 4, ("Good", "Good"), true)
            .await;

        let now = Utc::now();
        review::ActiveModel {
            id: Set(Uuid::now_v7()),
            product_name: Set("Imported".into()),
            stars: Set(None),
            kind: Set(ReviewKind::Mobile),
            product_type: Set(None),
            product_quality: Set(None),
            service_quality: Set(None),
            would_recommend: Set(None),
            customer_name: Set(None),
            mobile_number: Set(None),
            description: Set(None),
            image_url: Set(None),
            bought_from_url: Set(None),
            user_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&app.db)
        .await
        .expect("Failed to insert legacy row");

        let res = app.get_without_token(routes::MOBILE_ANALYTICS).await;

        assert_eq!(res.body["totalCount"], 2);
        assert_eq!(res.body["averageRating"], 2.0);
        assert_eq!(res.body["recommendationRate"], 50.0);
        let types = res.body["productTypeDistribution"].as_array().unwrap();
        assert!(types.iter().any(|e| e["key"] == "Unspecified"));
    }
}
