use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    PortfolioId,
    Title,
    Slug,
    Excerpt,
    Content,
    FeaturedImage,
    Tags,
    Status,
    IsFeatured,
    Views,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Resources {
    Table,
    Id,
    PortfolioId,
    Title,
    Description,
    File,
    Thumbnail,
    FileType,
    FileSize,
    Downloads,
    CreatedAt,
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
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPosts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPosts::PortfolioId).integer().not_null())
                    .col(ColumnDef::new(BlogPosts::Title).string_len(200).not_null())
                    .col(ColumnDef::new(BlogPosts::Slug).string_len(200).not_null())
                    .col(ColumnDef::new(BlogPosts::Excerpt).text().not_null().default(""))
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(ColumnDef::new(BlogPosts::FeaturedImage).string().null())
                    .col(ColumnDef::new(BlogPosts::Tags).string_len(300).not_null().default(""))
                    .col(ColumnDef::new(BlogPosts::Status).string_len(10).not_null().default("draft"))
                    .col(ColumnDef::new(BlogPosts::IsFeatured).boolean().not_null().default(false))
                    .col(ColumnDef::new(BlogPosts::Views).integer().not_null().default(0))
                    .col(ColumnDef::new(BlogPosts::PublishedAt).timestamp_with_time_zone().null())
                    .col(
                        ColumnDef::new(BlogPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_posts_portfolio_id")
                            .from(BlogPosts::Table, BlogPosts::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_portfolio_slug_unique")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::PortfolioId)
                    .col(BlogPosts::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Resources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resources::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Resources::PortfolioId).integer().not_null())
                    .col(ColumnDef::new(Resources::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Resources::Description).text().not_null())
                    .col(ColumnDef::new(Resources::File).string().not_null())
                    .col(ColumnDef::new(Resources::Thumbnail).string().null())
                    .col(ColumnDef::new(Resources::FileType).string_len(50).not_null().default(""))
                    .col(ColumnDef::new(Resources::FileSize).string_len(50).not_null().default(""))
                    .col(ColumnDef::new(Resources::Downloads).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Resources::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resources_portfolio_id")
                            .from(Resources::Table, Resources::PortfolioId)
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
            .drop_table(Table::drop().table(Resources::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await
    }
}
