use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// `(index name, table)` pairs for every `portfolio_id` foreign key.
const PORTFOLIO_FK_INDEXES: [(&str, &str); 10] = [
    ("idx_skills_portfolio_id", "skills"),
    ("idx_services_portfolio_id", "services"),
    ("idx_achievements_portfolio_id", "achievements"),
    ("idx_hobbies_portfolio_id", "hobbies"),
    ("idx_projects_portfolio_id", "projects"),
    ("idx_testimonials_portfolio_id", "testimonials"),
    ("idx_blog_posts_portfolio_id", "blog_posts"),
    ("idx_resources_portfolio_id", "resources"),
    ("idx_newsletter_subscribers_portfolio_id", "newsletter_subscribers"),
    ("idx_contact_messages_portfolio_id", "contact_messages"),
];

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    PortfolioId,
    Status,
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    ProjectId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table) in PORTFOLIO_FK_INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Alias::new(table))
                        .col(Alias::new("portfolio_id"))
                        .to_owned(),
                )
                .await?;
        }

        // Published-post listings filter on both columns.
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_portfolio_status")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::PortfolioId)
                    .col(BlogPosts::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_testimonials_project_id")
                    .table(Testimonials::Table)
                    .col(Testimonials::ProjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_testimonials_project_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_blog_posts_portfolio_status").to_owned())
            .await?;
        for (name, _) in PORTFOLIO_FK_INDEXES {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}
