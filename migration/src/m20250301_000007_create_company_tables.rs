use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum CompanyProfiles {
    Table,
    Id,
    Name,
    Tagline,
    Description,
    Logo,
    Website,
    Email,
    Phone,
    Address,
    Services,
    LinkedinUrl,
    GithubUrl,
    TwitterUrl,
    MetaTitle,
    MetaDescription,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FeaturedDevelopers {
    Table,
    Id,
    PortfolioId,
    DisplayOrder,
    IsActive,
    FeaturedSince,
    UpdatedAt,
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
                    .table(CompanyProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyProfiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CompanyProfiles::Name)
                            .string_len(200)
                            .not_null()
                            .default("DevLink Technologies"),
                    )
                    .col(ColumnDef::new(CompanyProfiles::Tagline).string_len(300).not_null().default(""))
                    .col(ColumnDef::new(CompanyProfiles::Description).text().not_null())
                    .col(ColumnDef::new(CompanyProfiles::Logo).string().null())
                    .col(ColumnDef::new(CompanyProfiles::Website).string().not_null().default(""))
                    .col(ColumnDef::new(CompanyProfiles::Email).string().not_null().default(""))
                    .col(ColumnDef::new(CompanyProfiles::Phone).string_len(20).not_null().default(""))
                    .col(ColumnDef::new(CompanyProfiles::Address).text().not_null().default(""))
                    .col(ColumnDef::new(CompanyProfiles::Services).text().not_null())
                    .col(ColumnDef::new(CompanyProfiles::LinkedinUrl).string().not_null().default(""))
                    .col(ColumnDef::new(CompanyProfiles::GithubUrl).string().not_null().default(""))
                    .col(ColumnDef::new(CompanyProfiles::TwitterUrl).string().not_null().default(""))
                    .col(ColumnDef::new(CompanyProfiles::MetaTitle).string_len(200).not_null().default(""))
                    .col(ColumnDef::new(CompanyProfiles::MetaDescription).text().not_null().default(""))
                    .col(ColumnDef::new(CompanyProfiles::IsActive).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(CompanyProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one active company profile.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_company_profiles_single_active ON company_profiles (is_active) WHERE is_active",
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FeaturedDevelopers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeaturedDevelopers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeaturedDevelopers::PortfolioId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(FeaturedDevelopers::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FeaturedDevelopers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(FeaturedDevelopers::FeaturedSince)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeaturedDevelopers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_featured_developers_portfolio_id")
                            .from(FeaturedDevelopers::Table, FeaturedDevelopers::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeaturedDevelopers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CompanyProfiles::Table).to_owned())
            .await
    }
}
