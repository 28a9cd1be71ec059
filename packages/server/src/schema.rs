use sea_orm::sea_query::{Index, IndexCreateStatement, PostgresQueryBuilder};
use sea_orm::*;
use tracing::{info, warn};

use crate::entity::review;

fn review_indexes() -> Vec<(&'static str, IndexCreateStatement)> {
    vec![
        // GET /reviews: WHERE user_id = ? ORDER BY created_at DESC
        (
            "idx_review_user_created",
            Index::create()
                .if_not_exists()
                .name("idx_review_user_created")
                .table(review::Entity)
                .col(review::Column::UserId)
                .col(review::Column::CreatedAt)
                .to_owned(),
        ),
        // GET /mobile-reviews: WHERE kind = 'Mobile' ORDER BY created_at DESC
        (
            "idx_review_kind_created",
            Index::create()
                .if_not_exists()
                .name("idx_review_kind_created")
                .table(review::Entity)
                .col(review::Column::Kind)
                .col(review::Column::CreatedAt)
                .to_owned(),
        ),
    ]
}

/// Ensure required database indexes exist.
///
/// SeaORM's schema-sync doesn't create composite non-unique indexes,
/// so we create them manually on startup. Failures are logged, not fatal.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    for (name, stmt) in review_indexes() {
        let sql = stmt.to_string(PostgresQueryBuilder);
        match db.execute_unprepared(&sql).await {
            Ok(_) => info!("Ensured index {} exists", name),
            Err(e) => warn!("Failed to create index {}: {}", name, e),
        }
    }
    Ok(())
}
