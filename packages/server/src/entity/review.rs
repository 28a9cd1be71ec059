use review_common::{Quality, ReviewKind};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "review")]
pub struct Model {
    /// UUIDv7, so primary key order follows creation order.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub product_name: String,
    /// 1-5. Nullable for rows imported without a rating.
    pub stars: Option<i32>,

    /// Standard or Mobile; the mobile shop form fills the columns below.
    pub kind: ReviewKind,
    pub product_type: Option<String>,
    pub product_quality: Option<Quality>,
    pub service_quality: Option<Quality>,
    pub would_recommend: Option<bool>,
    pub customer_name: Option<String>,
    pub mobile_number: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub bought_from_url: Option<String>,

    pub user_id: Option<i32>,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
