use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::portfolio::{PortfolioCarousel, PortfolioDetail};

/// Upper bound for the homepage "best developers" strip.
pub const BEST_DEVELOPERS_LIMIT: u64 = 12;

/// SeaORM entity for the `featured_developers` table.
///
/// Listed by `display_order`, then most recently featured first.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "featured_developers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub portfolio_id: i32,
    pub display_order: i32,
    pub is_active: bool,
    pub featured_since: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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

// ── Projections ──

/// Featured developer row with a nested portfolio view `P`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedDeveloperResponse<P> {
    pub id: i32,
    pub portfolio: P,
    pub display_order: i32,
    pub is_active: bool,
    pub featured_since: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

pub type FeaturedDeveloperSummary = FeaturedDeveloperResponse<PortfolioCarousel>;
pub type FeaturedDeveloperDetail = FeaturedDeveloperResponse<PortfolioDetail>;

impl<P> FeaturedDeveloperResponse<P> {
    pub fn new(m: Model, portfolio: P) -> Self {
        Self {
            id: m.id,
            portfolio,
            display_order: m.display_order,
            is_active: m.is_active,
            featured_since: m.featured_since,
            updated_at: m.updated_at,
        }
    }
}
