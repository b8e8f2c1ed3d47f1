pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_portfolios_table;
mod m20250301_000003_create_portfolio_sections;
mod m20250301_000004_create_projects_tables;
mod m20250301_000005_create_publishing_tables;
mod m20250301_000006_create_audience_tables;
mod m20250301_000007_create_company_tables;
mod m20250301_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_portfolios_table::Migration),
            Box::new(m20250301_000003_create_portfolio_sections::Migration),
            Box::new(m20250301_000004_create_projects_tables::Migration),
            Box::new(m20250301_000005_create_publishing_tables::Migration),
            Box::new(m20250301_000006_create_audience_tables::Migration),
            Box::new(m20250301_000007_create_company_tables::Migration),
            Box::new(m20250301_000008_add_indexes::Migration),
        ]
    }
}
