use sea_orm::prelude::Expr;
use sea_orm::sea_query::ExprTrait;
use sea_orm::*;

use crate::db::next_free_slug;
use crate::models::blog_posts::{self, CreateBlogPost, PostStatus};
use crate::models::{PaginationQuery, slugify};

fn published_in(portfolio_id: i32) -> Condition {
    Condition::all()
        .add(blog_posts::Column::PortfolioId.eq(portfolio_id))
        .add(blog_posts::Column::Status.eq(PostStatus::Published))
}

/// Published posts of a portfolio, newest first. Drafts are never returned.
pub async fn list_published(
    db: &DatabaseConnection,
    portfolio_id: i32,
    featured_only: bool,
    page: Option<&PaginationQuery>,
) -> Result<Vec<blog_posts::Model>, DbErr> {
    let mut query = blog_posts::Entity::find().filter(published_in(portfolio_id));
    if featured_only {
        query = query.filter(blog_posts::Column::IsFeatured.eq(true));
    }

    let query = query
        .order_by_desc(blog_posts::Column::PublishedAt)
        .order_by_desc(blog_posts::Column::CreatedAt)
        .order_by_desc(blog_posts::Column::Id);

    match page {
        Some(page) => query.offset(page.offset()).limit(page.limit()).all(db).await,
        None => query.all(db).await,
    }
}

/// Fetch a published post and count the view.
///
/// The counter is bumped in place with `views = views + 1` before the row is read
/// back, so concurrent readers never lose an increment.
pub async fn view_published_post(
    db: &DatabaseConnection,
    portfolio_id: i32,
    id: i32,
) -> Result<Option<blog_posts::Model>, DbErr> {
    let result = blog_posts::Entity::update_many()
        .col_expr(
            blog_posts::Column::Views,
            Expr::col(blog_posts::Column::Views).add(1),
        )
        .filter(published_in(portfolio_id))
        .filter(blog_posts::Column::Id.eq(id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Ok(None);
    }

    tracing::debug!(post_id = id, "blog post view recorded");

    blog_posts::Entity::find_by_id(id).one(db).await
}

/// Insert a post, deriving a slug unique within the portfolio.
pub async fn create_blog_post(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateBlogPost,
) -> Result<blog_posts::Model, DbErr> {
    let mut base = slugify(input.slug.as_deref().unwrap_or(&input.title));
    if base.is_empty() {
        base = "post".to_string();
    }

    let taken: Vec<String> = blog_posts::Entity::find()
        .select_only()
        .column(blog_posts::Column::Slug)
        .filter(blog_posts::Column::PortfolioId.eq(portfolio_id))
        .filter(blog_posts::Column::Slug.starts_with(&base))
        .into_tuple()
        .all(db)
        .await?;
    let slug = next_free_slug(&base, &taken);

    let status = input.status.unwrap_or(PostStatus::Draft);
    let now = chrono::Utc::now();
    let published_at = match (status, input.published_at) {
        (_, Some(at)) => Some(at),
        (PostStatus::Published, None) => Some(now),
        (PostStatus::Draft, None) => None,
    };

    let new_post = blog_posts::ActiveModel {
        portfolio_id: Set(portfolio_id),
        title: Set(input.title),
        slug: Set(slug),
        excerpt: Set(input.excerpt.unwrap_or_default()),
        content: Set(input.content),
        featured_image: Set(input.featured_image),
        tags: Set(input.tags.unwrap_or_default()),
        status: Set(status),
        is_featured: Set(input.is_featured.unwrap_or(false)),
        views: Set(0),
        published_at: Set(published_at),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    new_post.insert(db).await
}
