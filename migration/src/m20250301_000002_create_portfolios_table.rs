use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `portfolios` table and its columns.
#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
    UserId,
    Username,
    Name,
    Tagline,
    ProfileImage,
    IsActive,
    ThemeColor,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Abouts {
    Table,
    Id,
    PortfolioId,
    Bio,
    Background,
    CareerPath,
    Values,
    Location,
    Email,
    Phone,
    LinkedinUrl,
    GithubUrl,
    TwitterUrl,
    WebsiteUrl,
    ResumeFile,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portfolios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Portfolios::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Portfolios::Username)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Portfolios::Name).string_len(200).not_null().default(""))
                    .col(ColumnDef::new(Portfolios::Tagline).string_len(200).not_null().default(""))
                    .col(ColumnDef::new(Portfolios::ProfileImage).string().null())
                    .col(ColumnDef::new(Portfolios::IsActive).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(Portfolios::ThemeColor)
                            .string_len(7)
                            .not_null()
                            .default("#3B82F6"),
                    )
                    .col(
                        ColumnDef::new(Portfolios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Portfolios::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolios_user_id")
                            .from(Portfolios::Table, Portfolios::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Abouts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Abouts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Abouts::PortfolioId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Abouts::Bio).text().not_null())
                    .col(ColumnDef::new(Abouts::Background).text().not_null().default(""))
                    .col(ColumnDef::new(Abouts::CareerPath).text().not_null().default(""))
                    .col(ColumnDef::new(Abouts::Values).text().not_null().default(""))
                    .col(ColumnDef::new(Abouts::Location).string_len(100).not_null().default(""))
                    .col(ColumnDef::new(Abouts::Email).string().not_null().default(""))
                    .col(ColumnDef::new(Abouts::Phone).string_len(20).not_null().default(""))
                    .col(ColumnDef::new(Abouts::LinkedinUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Abouts::GithubUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Abouts::TwitterUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Abouts::WebsiteUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Abouts::ResumeFile).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_abouts_portfolio_id")
                            .from(Abouts::Table, Abouts::PortfolioId)
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
            .drop_table(Table::drop().table(Abouts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await
    }
}
