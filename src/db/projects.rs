use std::collections::HashMap;

use sea_orm::*;

use crate::db::{next_free_slug, sections};
use crate::models::case_studies::{self, CaseStudyResponse, CreateCaseStudy};
use crate::models::projects::{self, CreateProject, ProjectResponse};
use crate::models::slugify;
use crate::models::testimonials::TestimonialResponse;

/// Projects of a portfolio in display order: featured first, then `order`, then newest.
pub async fn list_projects(
    db: &DatabaseConnection,
    portfolio_id: i32,
    featured_only: bool,
) -> Result<Vec<ProjectResponse>, DbErr> {
    let mut query = projects::Entity::find().filter(projects::Column::PortfolioId.eq(portfolio_id));
    if featured_only {
        query = query.filter(projects::Column::IsFeatured.eq(true));
    }

    let rows = query
        .order_by_desc(projects::Column::IsFeatured)
        .order_by_asc(projects::Column::Order)
        .order_by_desc(projects::Column::CreatedAt)
        .order_by_desc(projects::Column::Id)
        .all(db)
        .await?;

    attach_children(db, rows).await
}

/// A single project of the portfolio, or `None` when the id belongs elsewhere.
pub async fn get_project(
    db: &DatabaseConnection,
    portfolio_id: i32,
    id: i32,
) -> Result<Option<ProjectResponse>, DbErr> {
    let row = projects::Entity::find_by_id(id)
        .filter(projects::Column::PortfolioId.eq(portfolio_id))
        .one(db)
        .await?;

    match row {
        Some(project) => Ok(attach_children(db, vec![project]).await?.pop()),
        None => Ok(None),
    }
}

/// Join case studies and testimonials onto `rows` with one query each.
async fn attach_children(
    db: &DatabaseConnection,
    rows: Vec<projects::Model>,
) -> Result<Vec<ProjectResponse>, DbErr> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = rows.iter().map(|p| p.id).collect();

    let mut case_studies: HashMap<i32, CaseStudyResponse> = case_studies::Entity::find()
        .filter(case_studies::Column::ProjectId.is_in(ids.clone()))
        .all(db)
        .await?
        .into_iter()
        .map(|cs| (cs.project_id, cs.into()))
        .collect();

    let mut testimonials: HashMap<i32, Vec<TestimonialResponse>> = HashMap::new();
    for testimonial in sections::get_testimonials_for_projects(db, ids).await? {
        if let Some(project_id) = testimonial.project {
            testimonials.entry(project_id).or_default().push(testimonial);
        }
    }

    Ok(rows
        .into_iter()
        .map(|p| {
            let case_study = case_studies.remove(&p.id);
            let testimonials = testimonials.remove(&p.id).unwrap_or_default();
            ProjectResponse::new(p, case_study, testimonials)
        })
        .collect())
}

/// Insert a project, deriving a slug unique within the portfolio.
pub async fn create_project(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateProject,
) -> Result<projects::Model, DbErr> {
    let mut base = slugify(input.slug.as_deref().unwrap_or(&input.title));
    if base.is_empty() {
        base = "project".to_string();
    }

    let taken: Vec<String> = projects::Entity::find()
        .select_only()
        .column(projects::Column::Slug)
        .filter(projects::Column::PortfolioId.eq(portfolio_id))
        .filter(projects::Column::Slug.starts_with(&base))
        .into_tuple()
        .all(db)
        .await?;
    let slug = next_free_slug(&base, &taken);

    let now = chrono::Utc::now();
    let new_project = projects::ActiveModel {
        portfolio_id: Set(portfolio_id),
        title: Set(input.title),
        slug: Set(slug),
        description: Set(input.description),
        detailed_description: Set(input.detailed_description.unwrap_or_default()),
        image: Set(input.image),
        thumbnail: Set(input.thumbnail),
        technologies: Set(input.technologies.unwrap_or_default()),
        live_url: Set(input.live_url.unwrap_or_default()),
        github_url: Set(input.github_url.unwrap_or_default()),
        demo_url: Set(input.demo_url.unwrap_or_default()),
        outcome: Set(input.outcome.unwrap_or_default()),
        is_featured: Set(input.is_featured.unwrap_or(false)),
        order: Set(input.order.unwrap_or(0)),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    new_project.insert(db).await
}

pub async fn create_case_study(
    db: &DatabaseConnection,
    project_id: i32,
    input: CreateCaseStudy,
) -> Result<case_studies::Model, DbErr> {
    let new_case_study = case_studies::ActiveModel {
        project_id: Set(project_id),
        challenge: Set(input.challenge),
        solution: Set(input.solution),
        process: Set(input.process),
        results: Set(input.results),
        lessons_learned: Set(input.lessons_learned),
        ..Default::default()
    };

    new_case_study.insert(db).await
}
