use sea_orm::prelude::Expr;
use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use crate::models::newsletter::{self, SubscribeOutcome, SubscribeRequest};

/// Idempotent subscribe against the `(portfolio_id, email)` unique index.
///
/// The insert skips on conflict instead of failing, so two concurrent first-time
/// subscribers can never create duplicate rows. An existing inactive row is flipped
/// back on with a conditional update.
pub async fn subscribe(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: SubscribeRequest,
) -> Result<SubscribeOutcome, DbErr> {
    let email = input.email.trim().to_string();

    let new_subscriber = newsletter::ActiveModel {
        portfolio_id: Set(portfolio_id),
        email: Set(email.clone()),
        name: Set(input.name.unwrap_or_default()),
        is_active: Set(true),
        subscribed_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let inserted = match newsletter::Entity::insert(new_subscriber)
        .on_conflict(
            OnConflict::columns([newsletter::Column::PortfolioId, newsletter::Column::Email])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
    {
        Ok(rows) => rows,
        Err(DbErr::RecordNotInserted) => 0,
        Err(e) => return Err(e),
    };

    if inserted > 0 {
        return Ok(SubscribeOutcome::Created);
    }

    let reactivated = newsletter::Entity::update_many()
        .col_expr(newsletter::Column::IsActive, Expr::value(true))
        .filter(newsletter::Column::PortfolioId.eq(portfolio_id))
        .filter(newsletter::Column::Email.eq(email))
        .filter(newsletter::Column::IsActive.eq(false))
        .exec(db)
        .await?;

    if reactivated.rows_affected > 0 {
        Ok(SubscribeOutcome::Reactivated)
    } else {
        Ok(SubscribeOutcome::AlreadyActive)
    }
}

/// Set a subscriber's `is_active` flag, e.g. after an unsubscribe link is followed.
pub async fn set_subscriber_active(
    db: &DatabaseConnection,
    portfolio_id: i32,
    email: &str,
    is_active: bool,
) -> Result<u64, DbErr> {
    let result = newsletter::Entity::update_many()
        .col_expr(newsletter::Column::IsActive, Expr::value(is_active))
        .filter(newsletter::Column::PortfolioId.eq(portfolio_id))
        .filter(newsletter::Column::Email.eq(email))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

/// All subscriber rows of a portfolio, active or not.
pub async fn list_subscribers(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> Result<Vec<newsletter::Model>, DbErr> {
    newsletter::Entity::find()
        .filter(newsletter::Column::PortfolioId.eq(portfolio_id))
        .order_by_asc(newsletter::Column::Id)
        .all(db)
        .await
}
