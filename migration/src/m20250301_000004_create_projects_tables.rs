use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    PortfolioId,
    Title,
    Slug,
    Description,
    DetailedDescription,
    Image,
    Thumbnail,
    Technologies,
    LiveUrl,
    GithubUrl,
    DemoUrl,
    Outcome,
    IsFeatured,
    Order,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CaseStudies {
    Table,
    Id,
    ProjectId,
    Challenge,
    Solution,
    Process,
    Results,
    LessonsLearned,
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    PortfolioId,
    ProjectId,
    ClientName,
    ClientRole,
    ClientCompany,
    ClientImage,
    Content,
    Rating,
    IsFeatured,
    Order,
    Date,
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::PortfolioId).integer().not_null())
                    .col(ColumnDef::new(Projects::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Projects::Slug).string_len(200).not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(
                        ColumnDef::new(Projects::DetailedDescription)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Projects::Image).string().null())
                    .col(ColumnDef::new(Projects::Thumbnail).string().null())
                    .col(ColumnDef::new(Projects::Technologies).string_len(500).not_null().default(""))
                    .col(ColumnDef::new(Projects::LiveUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Projects::GithubUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Projects::DemoUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Projects::Outcome).text().not_null().default(""))
                    .col(ColumnDef::new(Projects::IsFeatured).boolean().not_null().default(false))
                    .col(ColumnDef::new(Projects::Order).integer().not_null().default(0))
                    .col(ColumnDef::new(Projects::StartDate).date().null())
                    .col(ColumnDef::new(Projects::EndDate).date().null())
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_portfolio_id")
                            .from(Projects::Table, Projects::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CaseStudies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CaseStudies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CaseStudies::ProjectId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(CaseStudies::Challenge).text().not_null())
                    .col(ColumnDef::new(CaseStudies::Solution).text().not_null())
                    .col(ColumnDef::new(CaseStudies::Process).text().not_null().default(""))
                    .col(ColumnDef::new(CaseStudies::Results).text().not_null().default(""))
                    .col(ColumnDef::new(CaseStudies::LessonsLearned).text().not_null().default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_case_studies_project_id")
                            .from(CaseStudies::Table, CaseStudies::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonials::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Testimonials::PortfolioId).integer().not_null())
                    .col(ColumnDef::new(Testimonials::ProjectId).integer().null())
                    .col(ColumnDef::new(Testimonials::ClientName).string_len(100).not_null())
                    .col(ColumnDef::new(Testimonials::ClientRole).string_len(100).not_null().default(""))
                    .col(
                        ColumnDef::new(Testimonials::ClientCompany)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Testimonials::ClientImage).string().null())
                    .col(ColumnDef::new(Testimonials::Content).text().not_null())
                    .col(ColumnDef::new(Testimonials::Rating).integer().not_null().default(5))
                    .col(ColumnDef::new(Testimonials::IsFeatured).boolean().not_null().default(false))
                    .col(ColumnDef::new(Testimonials::Order).integer().not_null().default(0))
                    .col(ColumnDef::new(Testimonials::Date).date().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_testimonials_portfolio_id")
                            .from(Testimonials::Table, Testimonials::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_testimonials_project_id")
                            .from(Testimonials::Table, Testimonials::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_portfolio_slug_unique")
                    .table(Projects::Table)
                    .col(Projects::PortfolioId)
                    .col(Projects::Slug)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CaseStudies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}
