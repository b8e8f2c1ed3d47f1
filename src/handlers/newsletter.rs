use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::db::newsletter as newsletter_db;
use crate::error::ApiError;
use crate::handlers::resolve_portfolio;
use crate::models::newsletter::{SubscribeOutcome, SubscribeRequest};

/// POST /api/{username}/newsletter/subscribe/
///
/// 201 for a new subscriber, 200 for a reactivation or a repeat subscribe.
pub async fn subscribe(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    body: web::Json<SubscribeRequest>,
) -> Result<HttpResponse, ApiError> {
    let portfolio = resolve_portfolio(db.get_ref(), &path).await?;

    let input = body.into_inner();
    input.validate()?;

    let outcome = newsletter_db::subscribe(db.get_ref(), portfolio.id, input).await?;
    tracing::info!(portfolio = %portfolio.username, ?outcome, "newsletter subscribe");

    let body = serde_json::json!({ "message": outcome.message() });
    Ok(match outcome {
        SubscribeOutcome::Created => HttpResponse::Created().json(body),
        SubscribeOutcome::Reactivated | SubscribeOutcome::AlreadyActive => {
            HttpResponse::Ok().json(body)
        }
    })
}
