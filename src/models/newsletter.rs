use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// SeaORM entity for the `newsletter_subscribers` table.
/// `(portfolio_id, email)` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "newsletter_subscribers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub portfolio_id: i32,
    pub email: String,
    pub name: String,
    pub is_active: bool,
    pub subscribed_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::portfolio::Entity",
        from = "Column::PortfolioId",
        to = "super::portfolio::Column::Id",
        on_delete = "Cascade"
    )]
    Portfolio,
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Portfolio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body of `POST /{username}/newsletter/subscribe/`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Enter a valid email address")
    )]
    pub email: String,
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,
}

/// Result of an idempotent subscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Created,
    Reactivated,
    AlreadyActive,
}

impl SubscribeOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SubscribeOutcome::Created => "Successfully subscribed to newsletter",
            SubscribeOutcome::Reactivated => "Successfully resubscribed to newsletter",
            SubscribeOutcome::AlreadyActive => "Already subscribed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_have_distinct_messages() {
        let messages = [
            SubscribeOutcome::Created.message(),
            SubscribeOutcome::Reactivated.message(),
            SubscribeOutcome::AlreadyActive.message(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn subscribe_request_rejects_bad_email() {
        let bad = SubscribeRequest {
            email: "not-an-email".to_string(),
            name: None,
        };
        assert!(bad.validate().is_err());

        let empty = SubscribeRequest {
            email: String::new(),
            name: Some("Ada".to_string()),
        };
        assert!(empty.validate().is_err());

        let good = SubscribeRequest {
            email: "ada@example.com".to_string(),
            name: None,
        };
        assert!(good.validate().is_ok());
    }
}
