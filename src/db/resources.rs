use sea_orm::prelude::Expr;
use sea_orm::sea_query::ExprTrait;
use sea_orm::*;

use crate::models::resources::{self, CreateResource};

pub async fn list_resources(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> Result<Vec<resources::Model>, DbErr> {
    resources::Entity::find()
        .filter(resources::Column::PortfolioId.eq(portfolio_id))
        .order_by_desc(resources::Column::CreatedAt)
        .order_by_desc(resources::Column::Id)
        .all(db)
        .await
}

pub async fn get_resource(
    db: &DatabaseConnection,
    portfolio_id: i32,
    id: i32,
) -> Result<Option<resources::Model>, DbErr> {
    resources::Entity::find_by_id(id)
        .filter(resources::Column::PortfolioId.eq(portfolio_id))
        .one(db)
        .await
}

/// Atomically bump the download counter. Returns `false` when no such resource
/// belongs to the portfolio.
pub async fn record_download(
    db: &DatabaseConnection,
    portfolio_id: i32,
    id: i32,
) -> Result<bool, DbErr> {
    let result = resources::Entity::update_many()
        .col_expr(
            resources::Column::Downloads,
            Expr::col(resources::Column::Downloads).add(1),
        )
        .filter(resources::Column::PortfolioId.eq(portfolio_id))
        .filter(resources::Column::Id.eq(id))
        .exec(db)
        .await?;

    if result.rows_affected > 0 {
        tracing::debug!(resource_id = id, "resource download recorded");
    }
    Ok(result.rows_affected > 0)
}

pub async fn create_resource(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateResource,
) -> Result<resources::Model, DbErr> {
    let new_resource = resources::ActiveModel {
        portfolio_id: Set(portfolio_id),
        title: Set(input.title),
        description: Set(input.description),
        file: Set(input.file),
        thumbnail: Set(input.thumbnail),
        file_type: Set(input.file_type.unwrap_or_default()),
        file_size: Set(input.file_size.unwrap_or_default()),
        downloads: Set(0),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    new_resource.insert(db).await
}
