use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::db::contact as contact_db;
use crate::error::ApiError;
use crate::handlers::resolve_portfolio;
use crate::models::contact_messages::ContactRequest;

/// POST /api/{username}/contact/
pub async fn send_message(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    body: web::Json<ContactRequest>,
) -> Result<HttpResponse, ApiError> {
    let portfolio = resolve_portfolio(db.get_ref(), &path).await?;

    let input = body.into_inner();
    input.validate()?;

    let message = contact_db::insert_contact_message(db.get_ref(), portfolio.id, input).await?;
    tracing::info!(
        portfolio = %portfolio.username,
        message_id = message.id,
        "contact message stored"
    );

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Message sent successfully",
    })))
}
