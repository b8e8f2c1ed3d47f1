//! Query-layer behaviour against a migrated in-memory SQLite database.
//!
//! Run with: `cargo test --test query_test`

mod common;

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};

use devfolio_backend::db::{
    blog as blog_db, company as company_db, contact as contact_db, newsletter as newsletter_db,
    portfolio as portfolio_db, projects as projects_db, resources as resources_db,
    sections as sections_db, users as users_db,
};
use devfolio_backend::models::about::CreateAbout;
use devfolio_backend::models::achievements::{AchievementType, CreateAchievement};
use devfolio_backend::models::blog_posts::{self, CreateBlogPost, PostStatus};
use devfolio_backend::models::case_studies::{self, CreateCaseStudy};
use devfolio_backend::models::company_profile::CreateCompanyProfile;
use devfolio_backend::models::contact_messages::ContactRequest;
use devfolio_backend::models::featured_developers;
use devfolio_backend::models::hobbies::CreateHobby;
use devfolio_backend::models::newsletter::{SubscribeOutcome, SubscribeRequest};
use devfolio_backend::models::portfolio::{CreatePortfolio, DEFAULT_THEME_COLOR};
use devfolio_backend::models::projects::{self, CreateProject};
use devfolio_backend::models::resources::CreateResource;
use devfolio_backend::models::services::CreateService;
use devfolio_backend::models::skills::{self, CreateSkill};
use devfolio_backend::models::testimonials::CreateTestimonial;
use devfolio_backend::models::users::CreateUser;
use devfolio_backend::models::PaginationQuery;

use common::{seed_portfolio, setup_db};

fn project(title: &str, is_featured: bool, order: i32) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: format!("About {title}"),
        technologies: Some("Rust, Actix ,SeaORM".to_string()),
        is_featured: Some(is_featured),
        order: Some(order),
        ..Default::default()
    }
}

fn post(title: &str, status: PostStatus, is_featured: bool) -> CreateBlogPost {
    CreateBlogPost {
        title: title.to_string(),
        content: "Body".to_string(),
        tags: Some("rust, web".to_string()),
        status: Some(status),
        is_featured: Some(is_featured),
        ..Default::default()
    }
}

fn skill(name: &str) -> CreateSkill {
    CreateSkill {
        name: name.to_string(),
        category: None,
        proficiency: None,
        proficiency_percentage: Some(80),
        icon: None,
        order: None,
    }
}

fn subscribe_request(email: &str) -> SubscribeRequest {
    SubscribeRequest {
        email: email.to_string(),
        name: None,
    }
}

// ── Portfolio lookup ──

#[tokio::test]
async fn only_active_portfolios_resolve() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;
    seed_portfolio(&db, "bob", false).await;

    assert!(portfolio_db::find_active_by_username(&db, "ada").await.unwrap().is_some());
    assert!(portfolio_db::find_active_by_username(&db, "bob").await.unwrap().is_none());
    assert!(portfolio_db::find_active_by_username(&db, "nobody").await.unwrap().is_none());

    let listed = portfolio_db::list_active_portfolios(&db, &PaginationQuery::default())
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].username, "ada");

    portfolio_db::set_portfolio_active(&db, ada.id, false).await.unwrap();
    assert!(portfolio_db::find_active_by_username(&db, "ada").await.unwrap().is_none());
}

#[tokio::test]
async fn portfolio_username_is_derived_from_owner() {
    let db = setup_db().await;
    let owner = users_db::insert_user(
        &db,
        CreateUser {
            username: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
        },
    )
    .await
    .unwrap();

    let created = portfolio_db::create_portfolio(&db, &owner, CreatePortfolio::default())
        .await
        .unwrap();
    assert_eq!(created.username, "grace-hopper");
    assert_eq!(created.theme_color, DEFAULT_THEME_COLOR);
    assert!(created.is_active);

    let fetched = users_db::get_user_by_id(&db, owner.id).await.unwrap().unwrap();
    assert_eq!(fetched.username, "Grace Hopper");
}

#[tokio::test]
async fn invalid_theme_color_is_rejected() {
    let db = setup_db().await;
    let owner = users_db::insert_user(
        &db,
        CreateUser {
            username: "linus".to_string(),
            email: "linus@example.com".to_string(),
        },
    )
    .await
    .unwrap();

    let result = portfolio_db::create_portfolio(
        &db,
        &owner,
        CreatePortfolio {
            theme_color: Some("blue".to_string()),
            ..Default::default()
        },
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn reserved_usernames_are_rejected() {
    let db = setup_db().await;
    let company = users_db::insert_user(
        &db,
        CreateUser {
            username: "company".to_string(),
            email: "company@example.com".to_string(),
        },
    )
    .await
    .unwrap();
    let grace = users_db::insert_user(
        &db,
        CreateUser {
            username: "grace".to_string(),
            email: "grace@example.com".to_string(),
        },
    )
    .await
    .unwrap();

    let derived = portfolio_db::create_portfolio(&db, &company, CreatePortfolio::default()).await;
    assert!(matches!(derived, Err(DbErr::Custom(_))));

    let explicit = portfolio_db::create_portfolio(
        &db,
        &grace,
        CreatePortfolio {
            username: Some("portfolios".to_string()),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(explicit, Err(DbErr::Custom(_))));

    let ok = portfolio_db::create_portfolio(&db, &grace, CreatePortfolio::default())
        .await
        .unwrap();
    assert_eq!(ok.username, "grace");
}

#[tokio::test]
async fn derived_username_folds_accents() {
    let db = setup_db().await;
    let owner = users_db::insert_user(
        &db,
        CreateUser {
            username: "José Núñez".to_string(),
            email: "jose@example.com".to_string(),
        },
    )
    .await
    .unwrap();

    let created = portfolio_db::create_portfolio(&db, &owner, CreatePortfolio::default())
        .await
        .unwrap();
    assert_eq!(created.username, "jose-nunez");
}

#[tokio::test]
async fn portfolio_listing_is_paginated() {
    let db = setup_db().await;
    for name in ["a1", "a2", "a3"] {
        seed_portfolio(&db, name, true).await;
    }

    let first = PaginationQuery {
        page: Some(1),
        limit: Some(2),
    };
    let second = PaginationQuery {
        page: Some(2),
        limit: Some(2),
    };
    let page_one = portfolio_db::list_active_portfolios(&db, &first).await.unwrap();
    let page_two = portfolio_db::list_active_portfolios(&db, &second).await.unwrap();

    assert_eq!(page_one.len(), 2);
    assert_eq!(page_two.len(), 1);
    assert!(page_one.iter().all(|p| p.id != page_two[0].id));
}

#[tokio::test]
async fn detail_collects_every_section() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;

    let empty = portfolio_db::load_detail(&db, ada.clone()).await.unwrap();
    assert!(empty.about.is_none());
    assert!(empty.projects.is_empty());

    sections_db::insert_about(
        &db,
        ada.id,
        CreateAbout {
            bio: "Systems programmer".to_string(),
            location: "London".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    sections_db::insert_skill(&db, ada.id, skill("Rust")).await.unwrap();
    sections_db::insert_skill(&db, ada.id, skill("Go")).await.unwrap();
    for (title, order) in [("Consulting", 2), ("Code review", 1)] {
        sections_db::insert_service(
            &db,
            ada.id,
            CreateService {
                title: title.to_string(),
                description: format!("{title} for small teams"),
                icon: None,
                price_range: None,
                order: Some(order),
            },
        )
        .await
        .unwrap();
    }
    for (title, year) in [("Older award", 2019), ("Newer award", 2023)] {
        sections_db::insert_achievement(
            &db,
            ada.id,
            CreateAchievement {
                title: title.to_string(),
                achievement_type: Some(AchievementType::Award),
                issuer: None,
                description: None,
                image: None,
                credential_url: None,
                date_received: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
                expiry_date: None,
                order: None,
            },
        )
        .await
        .unwrap();
    }
    sections_db::insert_hobby(
        &db,
        ada.id,
        CreateHobby {
            title: "Chess".to_string(),
            description: None,
            icon: None,
            order: None,
        },
    )
    .await
    .unwrap();
    projects_db::create_project(&db, ada.id, project("Compiler", true, 0))
        .await
        .unwrap();

    let detail = portfolio_db::load_detail(&db, ada).await.unwrap();
    assert_eq!(
        detail.about.as_ref().map(|a| a.bio.as_str()),
        Some("Systems programmer")
    );
    let services: Vec<_> = detail.services.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(services, vec!["Code review", "Consulting"]);
    let achievements: Vec<_> = detail.achievements.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(achievements, vec!["Newer award", "Older award"]);
    assert_eq!(detail.hobbies.len(), 1);
    // Equal `order`, so alphabetical.
    let names: Vec<_> = detail.skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Go", "Rust"]);
    assert_eq!(detail.projects.len(), 1);
    assert_eq!(
        detail.projects[0].technologies_list,
        vec!["Rust", "Actix", "SeaORM"]
    );
}

#[tokio::test]
async fn skill_percentage_must_be_in_range() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;

    let mut too_high = skill("Rust");
    too_high.proficiency_percentage = Some(101);
    assert!(sections_db::insert_skill(&db, ada.id, too_high).await.is_err());
}

// ── Projects ──

#[tokio::test]
async fn projects_follow_featured_then_order_then_newest() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;

    for (title, featured, order) in [
        ("Second featured", true, 2),
        ("First featured", true, 1),
        ("Older plain", false, 0),
        ("Newer plain", false, 0),
    ] {
        projects_db::create_project(&db, ada.id, project(title, featured, order))
            .await
            .unwrap();
    }

    let all = projects_db::list_projects(&db, ada.id, false).await.unwrap();
    let titles: Vec<_> = all.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["First featured", "Second featured", "Newer plain", "Older plain"]
    );

    let featured = projects_db::list_projects(&db, ada.id, true).await.unwrap();
    assert_eq!(featured.len(), 2);
    assert!(featured.iter().all(|p| p.is_featured));
    assert!(featured.iter().all(|f| all.iter().any(|p| p.id == f.id)));
}

#[tokio::test]
async fn project_slugs_are_unique_per_portfolio() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;
    let bob = seed_portfolio(&db, "bob", true).await;

    let first = projects_db::create_project(&db, ada.id, project("My Site", false, 0))
        .await
        .unwrap();
    let second = projects_db::create_project(&db, ada.id, project("My Site", false, 0))
        .await
        .unwrap();
    let other = projects_db::create_project(&db, bob.id, project("My Site", false, 0))
        .await
        .unwrap();
    let symbols = projects_db::create_project(&db, ada.id, project("!!!", false, 0))
        .await
        .unwrap();

    assert_eq!(first.slug, "my-site");
    assert_eq!(second.slug, "my-site-2");
    assert_eq!(other.slug, "my-site");
    assert_eq!(symbols.slug, "project");
}

#[tokio::test]
async fn project_carries_case_study_and_testimonials() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;
    let created = projects_db::create_project(&db, ada.id, project("Compiler", true, 0))
        .await
        .unwrap();

    projects_db::create_case_study(
        &db,
        created.id,
        CreateCaseStudy {
            challenge: "Slow builds".to_string(),
            solution: "Incremental parsing".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    sections_db::insert_testimonial(
        &db,
        ada.id,
        CreateTestimonial {
            client_name: "Linus".to_string(),
            client_role: None,
            client_company: None,
            client_image: None,
            content: "Great work".to_string(),
            rating: Some(5),
            project_id: Some(created.id),
            is_featured: Some(true),
            order: None,
            date: NaiveDate::from_ymd_opt(2024, 5, 1),
        },
    )
    .await
    .unwrap();

    let fetched = projects_db::get_project(&db, ada.id, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        fetched.case_study.as_ref().map(|cs| cs.challenge.as_str()),
        Some("Slow builds")
    );
    assert_eq!(fetched.testimonials.len(), 1);
    assert_eq!(
        fetched.testimonials[0].project_title.as_deref(),
        Some("Compiler")
    );

    // Project ids are scoped to their portfolio.
    let bob = seed_portfolio(&db, "bob", true).await;
    assert!(projects_db::get_project(&db, bob.id, created.id).await.unwrap().is_none());
}

// ── Blog ──

#[tokio::test]
async fn drafts_never_surface() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;

    let draft = blog_db::create_blog_post(&db, ada.id, post("Draft", PostStatus::Draft, true))
        .await
        .unwrap();
    blog_db::create_blog_post(&db, ada.id, post("Live", PostStatus::Published, false))
        .await
        .unwrap();

    let listed = blog_db::list_published(&db, ada.id, false, None).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Live");

    let featured = blog_db::list_published(&db, ada.id, true, None).await.unwrap();
    assert!(featured.is_empty());

    assert!(blog_db::view_published_post(&db, ada.id, draft.id).await.unwrap().is_none());
    let untouched = blog_posts::Entity::find_by_id(draft.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.views, 0);
}

#[tokio::test]
async fn published_posts_are_newest_first_and_paginated() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;
    let now = Utc::now();

    for (title, days_ago) in [("Old", 10), ("Newest", 1), ("Middle", 5)] {
        let mut input = post(title, PostStatus::Published, false);
        input.published_at = Some(now - Duration::days(days_ago));
        blog_db::create_blog_post(&db, ada.id, input).await.unwrap();
    }

    let all = blog_db::list_published(&db, ada.id, false, None).await.unwrap();
    let titles: Vec<_> = all.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Newest", "Middle", "Old"]);

    let page = PaginationQuery {
        page: Some(2),
        limit: Some(2),
    };
    let second = blog_db::list_published(&db, ada.id, false, Some(&page)).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].title, "Old");
}

#[tokio::test]
async fn each_view_increments_by_one() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;
    let live = blog_db::create_blog_post(&db, ada.id, post("Live", PostStatus::Published, false))
        .await
        .unwrap();

    let mut last = None;
    for _ in 0..5 {
        last = blog_db::view_published_post(&db, ada.id, live.id).await.unwrap();
    }
    assert_eq!(last.map(|p| p.views), Some(5));
}

#[tokio::test]
async fn concurrent_views_are_not_lost() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;
    let live = blog_db::create_blog_post(&db, ada.id, post("Live", PostStatus::Published, false))
        .await
        .unwrap();

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let db = db.clone();
            let (portfolio_id, id) = (ada.id, live.id);
            tokio::spawn(async move { blog_db::view_published_post(&db, portfolio_id, id).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = blog_posts::Entity::find_by_id(live.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.views, 10);
}

// ── Resources ──

#[tokio::test]
async fn downloads_are_counted_per_portfolio() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;
    let bob = seed_portfolio(&db, "bob", true).await;

    let resource = resources_db::create_resource(
        &db,
        ada.id,
        CreateResource {
            title: "Cheat sheet".to_string(),
            description: "Rust ownership cheat sheet".to_string(),
            file: "resources/cheat-sheet.pdf".to_string(),
            thumbnail: None,
            file_type: Some("PDF".to_string()),
            file_size: Some("1.2 MB".to_string()),
        },
    )
    .await
    .unwrap();

    for _ in 0..3 {
        assert!(resources_db::record_download(&db, ada.id, resource.id).await.unwrap());
    }
    assert!(!resources_db::record_download(&db, bob.id, resource.id).await.unwrap());

    let stored = resources_db::get_resource(&db, ada.id, resource.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.downloads, 3);
    assert_eq!(resources_db::list_resources(&db, ada.id).await.unwrap().len(), 1);
    assert!(resources_db::list_resources(&db, bob.id).await.unwrap().is_empty());
}

// ── Newsletter & contact ──

#[tokio::test]
async fn subscribe_is_idempotent_and_reactivates() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;

    let first = newsletter_db::subscribe(&db, ada.id, subscribe_request("a@x.com"))
        .await
        .unwrap();
    let again = newsletter_db::subscribe(&db, ada.id, subscribe_request("a@x.com"))
        .await
        .unwrap();
    assert_eq!(first, SubscribeOutcome::Created);
    assert_eq!(again, SubscribeOutcome::AlreadyActive);
    assert_eq!(newsletter_db::list_subscribers(&db, ada.id).await.unwrap().len(), 1);

    newsletter_db::set_subscriber_active(&db, ada.id, "a@x.com", false)
        .await
        .unwrap();
    let back = newsletter_db::subscribe(&db, ada.id, subscribe_request("a@x.com"))
        .await
        .unwrap();
    assert_eq!(back, SubscribeOutcome::Reactivated);

    let rows = newsletter_db::list_subscribers(&db, ada.id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_active);

    // Same email, different portfolio: a separate subscription.
    let bob = seed_portfolio(&db, "bob", true).await;
    let elsewhere = newsletter_db::subscribe(&db, bob.id, subscribe_request("a@x.com"))
        .await
        .unwrap();
    assert_eq!(elsewhere, SubscribeOutcome::Created);
}

#[tokio::test]
async fn contact_messages_are_appended() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;

    for _ in 0..2 {
        contact_db::insert_contact_message(
            &db,
            ada.id,
            ContactRequest {
                name: "Grace".to_string(),
                email: "grace@example.com".to_string(),
                subject: None,
                message: "Hello".to_string(),
            },
        )
        .await
        .unwrap();
    }

    let stored = contact_db::list_contact_messages(&db, ada.id).await.unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|m| !m.is_read && m.subject.is_empty()));
}

// ── Company ──

#[tokio::test]
async fn at_most_one_company_profile_is_active() {
    let db = setup_db().await;
    assert!(company_db::get_active_profile(&db).await.unwrap().is_none());

    let dormant = company_db::create_company_profile(
        &db,
        CreateCompanyProfile {
            description: "Old".to_string(),
            services: "Web".to_string(),
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    // A profile exists, but none is active.
    assert!(company_db::get_active_profile(&db).await.unwrap().is_none());

    let first = company_db::create_company_profile(
        &db,
        CreateCompanyProfile {
            description: "First".to_string(),
            services: "Web, Mobile".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let second = company_db::create_company_profile(
        &db,
        CreateCompanyProfile {
            description: "Second".to_string(),
            services: "Cloud".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let active = company_db::get_active_profile(&db).await.unwrap().unwrap();
    assert_eq!(active.id, second.id);
    assert_ne!(active.id, first.id);

    company_db::activate_company_profile(&db, dormant.id).await.unwrap();
    let active = company_db::get_active_profile(&db).await.unwrap().unwrap();
    assert_eq!(active.id, dormant.id);

    assert!(company_db::activate_company_profile(&db, 9999).await.is_err());
}

#[tokio::test]
async fn best_developers_are_capped_and_filtered() {
    let db = setup_db().await;

    for i in 0..15 {
        let p = seed_portfolio(&db, &format!("dev{i}"), true).await;
        sections_db::insert_skill(&db, p.id, skill("Rust")).await.unwrap();
        company_db::feature_developer(&db, p.id, i).await.unwrap();
    }
    let hidden = seed_portfolio(&db, "hidden", false).await;
    company_db::feature_developer(&db, hidden.id, -1).await.unwrap();
    let benched = seed_portfolio(&db, "benched", true).await;
    let benched_row = company_db::feature_developer(&db, benched.id, -2).await.unwrap();
    company_db::set_featured_active(&db, benched_row.id, false).await.unwrap();

    let best = company_db::list_featured_developers(&db, Some(12)).await.unwrap();
    assert_eq!(best.len(), 12);
    assert_eq!(best[0].portfolio.summary.username, "dev0");
    assert_eq!(best[0].portfolio.skills.len(), 1);

    let all = company_db::list_featured_developers(&db, None).await.unwrap();
    assert_eq!(all.len(), 15);
    assert!(all.iter().all(|d| d.portfolio.summary.username != "hidden"));
    assert!(all.iter().all(|d| d.portfolio.summary.username != "benched"));

    let orders: Vec<_> = all.iter().map(|d| d.display_order).collect();
    let mut sorted = orders.clone();
    sorted.sort();
    assert_eq!(orders, sorted);
}

#[tokio::test]
async fn featured_detail_respects_portfolio_visibility() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;
    let row = company_db::feature_developer(&db, ada.id, 0).await.unwrap();

    let detail = company_db::get_featured_developer_detail(&db, row.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.portfolio.summary.username, "ada");

    portfolio_db::set_portfolio_active(&db, ada.id, false).await.unwrap();
    assert!(company_db::get_featured_developer_detail(&db, row.id).await.unwrap().is_none());
}

// ── Cascade ──

#[tokio::test]
async fn deleting_a_portfolio_removes_its_rows() {
    let db = setup_db().await;
    let ada = seed_portfolio(&db, "ada", true).await;
    let bob = seed_portfolio(&db, "bob", true).await;

    sections_db::insert_skill(&db, ada.id, skill("Rust")).await.unwrap();
    sections_db::insert_skill(&db, bob.id, skill("Go")).await.unwrap();
    let created = projects_db::create_project(&db, ada.id, project("Compiler", false, 0))
        .await
        .unwrap();
    projects_db::create_case_study(
        &db,
        created.id,
        CreateCaseStudy {
            challenge: "c".to_string(),
            solution: "s".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    blog_db::create_blog_post(&db, ada.id, post("Live", PostStatus::Published, false))
        .await
        .unwrap();
    company_db::feature_developer(&db, ada.id, 0).await.unwrap();

    let result = portfolio_db::delete_portfolio(&db, ada.id).await.unwrap();
    assert_eq!(result.rows_affected, 1);

    assert_eq!(skills::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(projects::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(case_studies::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(blog_posts::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(featured_developers::Entity::find().count(&db).await.unwrap(), 0);
    assert!(portfolio_db::get_portfolio_by_id(&db, bob.id).await.unwrap().is_some());
}
