use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    PortfolioId,
    Name,
    Category,
    Proficiency,
    ProficiencyPercentage,
    Icon,
    Order,
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    PortfolioId,
    Title,
    Description,
    Icon,
    PriceRange,
    Order,
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Id,
    PortfolioId,
    Title,
    Type,
    Issuer,
    Description,
    Image,
    CredentialUrl,
    DateReceived,
    ExpiryDate,
    Order,
}

#[derive(DeriveIden)]
enum Hobbies {
    Table,
    Id,
    PortfolioId,
    Title,
    Description,
    Icon,
    Order,
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
}

fn cascade_to_portfolio(
    name: &str,
    table: impl IntoTableRef,
    column: impl IntoIden,
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(Portfolios::Table, Portfolios::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::PortfolioId).integer().not_null())
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Category).string_len(20).not_null().default("other"))
                    .col(
                        ColumnDef::new(Skills::Proficiency)
                            .string_len(20)
                            .not_null()
                            .default("intermediate"),
                    )
                    .col(
                        ColumnDef::new(Skills::ProficiencyPercentage)
                            .integer()
                            .not_null()
                            .default(50),
                    )
                    .col(ColumnDef::new(Skills::Icon).string_len(100).not_null().default(""))
                    .col(ColumnDef::new(Skills::Order).integer().not_null().default(0))
                    .foreign_key(&mut cascade_to_portfolio(
                        "fk_skills_portfolio_id",
                        Skills::Table,
                        Skills::PortfolioId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Services::PortfolioId).integer().not_null())
                    .col(ColumnDef::new(Services::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Services::Description).text().not_null())
                    .col(ColumnDef::new(Services::Icon).string_len(100).not_null().default(""))
                    .col(ColumnDef::new(Services::PriceRange).string_len(100).not_null().default(""))
                    .col(ColumnDef::new(Services::Order).integer().not_null().default(0))
                    .foreign_key(&mut cascade_to_portfolio(
                        "fk_services_portfolio_id",
                        Services::Table,
                        Services::PortfolioId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Achievements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Achievements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Achievements::PortfolioId).integer().not_null())
                    .col(ColumnDef::new(Achievements::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Achievements::Type)
                            .string_len(20)
                            .not_null()
                            .default("certification"),
                    )
                    .col(ColumnDef::new(Achievements::Issuer).string_len(200).not_null().default(""))
                    .col(ColumnDef::new(Achievements::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Achievements::Image).string().null())
                    .col(ColumnDef::new(Achievements::CredentialUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Achievements::DateReceived).date().not_null())
                    .col(ColumnDef::new(Achievements::ExpiryDate).date().null())
                    .col(ColumnDef::new(Achievements::Order).integer().not_null().default(0))
                    .foreign_key(&mut cascade_to_portfolio(
                        "fk_achievements_portfolio_id",
                        Achievements::Table,
                        Achievements::PortfolioId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Hobbies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hobbies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hobbies::PortfolioId).integer().not_null())
                    .col(ColumnDef::new(Hobbies::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Hobbies::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Hobbies::Icon).string_len(100).not_null().default(""))
                    .col(ColumnDef::new(Hobbies::Order).integer().not_null().default(0))
                    .foreign_key(&mut cascade_to_portfolio(
                        "fk_hobbies_portfolio_id",
                        Hobbies::Table,
                        Hobbies::PortfolioId,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hobbies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Achievements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}
