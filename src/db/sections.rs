//! Queries and inserts for the simple per-portfolio sections: about, skills,
//! services, testimonials, achievements and hobbies.

use sea_orm::*;

use crate::models::about::{self, CreateAbout};
use crate::models::achievements::{self, AchievementType, CreateAchievement};
use crate::models::hobbies::{self, CreateHobby};
use crate::models::projects;
use crate::models::services::{self, CreateService};
use crate::models::skills::{self, CreateSkill, Proficiency, SkillCategory};
use crate::models::testimonials::{self, CreateTestimonial, TestimonialResponse};

pub async fn get_about(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> Result<Option<about::Model>, DbErr> {
    about::Entity::find()
        .filter(about::Column::PortfolioId.eq(portfolio_id))
        .one(db)
        .await
}

/// Skills ordered by (`order`, `name`).
pub async fn get_skills(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> Result<Vec<skills::Model>, DbErr> {
    get_skills_for_portfolios(db, vec![portfolio_id]).await
}

/// Skills for many portfolios in one query, each portfolio's rows in display order.
pub async fn get_skills_for_portfolios(
    db: &DatabaseConnection,
    portfolio_ids: Vec<i32>,
) -> Result<Vec<skills::Model>, DbErr> {
    if portfolio_ids.is_empty() {
        return Ok(Vec::new());
    }

    skills::Entity::find()
        .filter(skills::Column::PortfolioId.is_in(portfolio_ids))
        .order_by_asc(skills::Column::Order)
        .order_by_asc(skills::Column::Name)
        .all(db)
        .await
}

pub async fn get_services(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> Result<Vec<services::Model>, DbErr> {
    services::Entity::find()
        .filter(services::Column::PortfolioId.eq(portfolio_id))
        .order_by_asc(services::Column::Order)
        .order_by_asc(services::Column::Id)
        .all(db)
        .await
}

/// Achievements ordered by `order`, then most recently received.
pub async fn get_achievements(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> Result<Vec<achievements::Model>, DbErr> {
    achievements::Entity::find()
        .filter(achievements::Column::PortfolioId.eq(portfolio_id))
        .order_by_asc(achievements::Column::Order)
        .order_by_desc(achievements::Column::DateReceived)
        .all(db)
        .await
}

pub async fn get_hobbies(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> Result<Vec<hobbies::Model>, DbErr> {
    hobbies::Entity::find()
        .filter(hobbies::Column::PortfolioId.eq(portfolio_id))
        .order_by_asc(hobbies::Column::Order)
        .order_by_asc(hobbies::Column::Id)
        .all(db)
        .await
}

/// Testimonials matching `condition`, featured first, then by `order`, newest first,
/// each with the title of the project it refers to.
async fn get_testimonials_where(
    db: &DatabaseConnection,
    condition: Condition,
) -> Result<Vec<TestimonialResponse>, DbErr> {
    let rows = testimonials::Entity::find()
        .find_also_related(projects::Entity)
        .filter(condition)
        .order_by_desc(testimonials::Column::IsFeatured)
        .order_by_asc(testimonials::Column::Order)
        .order_by_desc(testimonials::Column::Date)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(testimonial, project)| {
            TestimonialResponse::new(testimonial, project.map(|p| p.title))
        })
        .collect())
}

pub async fn get_testimonials(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> Result<Vec<TestimonialResponse>, DbErr> {
    get_testimonials_where(
        db,
        Condition::all().add(testimonials::Column::PortfolioId.eq(portfolio_id)),
    )
    .await
}

/// Testimonials attached to any of `project_ids`.
pub async fn get_testimonials_for_projects(
    db: &DatabaseConnection,
    project_ids: Vec<i32>,
) -> Result<Vec<TestimonialResponse>, DbErr> {
    if project_ids.is_empty() {
        return Ok(Vec::new());
    }

    get_testimonials_where(
        db,
        Condition::all().add(testimonials::Column::ProjectId.is_in(project_ids)),
    )
    .await
}

// ── Inserts ──

pub async fn insert_about(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateAbout,
) -> Result<about::Model, DbErr> {
    let new_about = about::ActiveModel {
        portfolio_id: Set(portfolio_id),
        bio: Set(input.bio),
        background: Set(input.background),
        career_path: Set(input.career_path),
        values: Set(input.values),
        location: Set(input.location),
        email: Set(input.email),
        phone: Set(input.phone),
        linkedin_url: Set(input.linkedin_url),
        github_url: Set(input.github_url),
        twitter_url: Set(input.twitter_url),
        website_url: Set(input.website_url),
        resume_file: Set(input.resume_file),
        ..Default::default()
    };

    new_about.insert(db).await
}

pub async fn insert_skill(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateSkill,
) -> Result<skills::Model, DbErr> {
    let percentage = input.proficiency_percentage.unwrap_or(50);
    if !(0..=100).contains(&percentage) {
        return Err(DbErr::Custom(format!(
            "proficiency_percentage must be between 0 and 100, got {percentage}"
        )));
    }

    let new_skill = skills::ActiveModel {
        portfolio_id: Set(portfolio_id),
        name: Set(input.name),
        category: Set(input.category.unwrap_or(SkillCategory::Other)),
        proficiency: Set(input.proficiency.unwrap_or(Proficiency::Intermediate)),
        proficiency_percentage: Set(percentage),
        icon: Set(input.icon.unwrap_or_default()),
        order: Set(input.order.unwrap_or(0)),
        ..Default::default()
    };

    new_skill.insert(db).await
}

pub async fn insert_service(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateService,
) -> Result<services::Model, DbErr> {
    let new_service = services::ActiveModel {
        portfolio_id: Set(portfolio_id),
        title: Set(input.title),
        description: Set(input.description),
        icon: Set(input.icon.unwrap_or_default()),
        price_range: Set(input.price_range.unwrap_or_default()),
        order: Set(input.order.unwrap_or(0)),
        ..Default::default()
    };

    new_service.insert(db).await
}

pub async fn insert_testimonial(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateTestimonial,
) -> Result<testimonials::Model, DbErr> {
    let new_testimonial = testimonials::ActiveModel {
        portfolio_id: Set(portfolio_id),
        project_id: Set(input.project_id),
        client_name: Set(input.client_name),
        client_role: Set(input.client_role.unwrap_or_default()),
        client_company: Set(input.client_company.unwrap_or_default()),
        client_image: Set(input.client_image),
        content: Set(input.content),
        rating: Set(input.rating.unwrap_or(5)),
        is_featured: Set(input.is_featured.unwrap_or(false)),
        order: Set(input.order.unwrap_or(0)),
        date: Set(input.date),
        ..Default::default()
    };

    new_testimonial.insert(db).await
}

pub async fn insert_achievement(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateAchievement,
) -> Result<achievements::Model, DbErr> {
    let new_achievement = achievements::ActiveModel {
        portfolio_id: Set(portfolio_id),
        title: Set(input.title),
        achievement_type: Set(input
            .achievement_type
            .unwrap_or(AchievementType::Certification)),
        issuer: Set(input.issuer.unwrap_or_default()),
        description: Set(input.description.unwrap_or_default()),
        image: Set(input.image),
        credential_url: Set(input.credential_url.unwrap_or_default()),
        date_received: Set(input.date_received),
        expiry_date: Set(input.expiry_date),
        order: Set(input.order.unwrap_or(0)),
        ..Default::default()
    };

    new_achievement.insert(db).await
}

pub async fn insert_hobby(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateHobby,
) -> Result<hobbies::Model, DbErr> {
    let new_hobby = hobbies::ActiveModel {
        portfolio_id: Set(portfolio_id),
        title: Set(input.title),
        description: Set(input.description.unwrap_or_default()),
        icon: Set(input.icon.unwrap_or_default()),
        order: Set(input.order.unwrap_or(0)),
        ..Default::default()
    };

    new_hobby.insert(db).await
}
