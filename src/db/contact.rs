use sea_orm::*;

use crate::models::contact_messages::{self, ContactRequest};

/// Store a contact form submission. No deduplication.
pub async fn insert_contact_message(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: ContactRequest,
) -> Result<contact_messages::Model, DbErr> {
    let new_message = contact_messages::ActiveModel {
        portfolio_id: Set(portfolio_id),
        name: Set(input.name),
        email: Set(input.email.trim().to_string()),
        subject: Set(input.subject.unwrap_or_default()),
        message: Set(input.message),
        is_read: Set(false),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    new_message.insert(db).await
}

/// Messages received by a portfolio, newest first.
pub async fn list_contact_messages(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> Result<Vec<contact_messages::Model>, DbErr> {
    contact_messages::Entity::find()
        .filter(contact_messages::Column::PortfolioId.eq(portfolio_id))
        .order_by_desc(contact_messages::Column::CreatedAt)
        .order_by_desc(contact_messages::Column::Id)
        .all(db)
        .await
}
