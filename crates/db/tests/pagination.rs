//! Integration tests for paginated document listing and filters.

use sqlx::PgPool;

use oia_core::pagination::PageParams;
use oia_db::models::filter::ListFilter;
use oia_db::models::mou::CreateMou;
use oia_db::models::user::CreateUser;
use oia_db::repositories::{MouRepo, UserRepo};

async fn seed_owner(pool: &PgPool) -> oia_core::types::DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            username: "owner".to_string(),
            email: "owner@example.edu".to_string(),
            password_hash: "x".to_string(),
            department: None,
        },
    )
    .await
    .unwrap()
    .id
}

fn mou(n: usize) -> CreateMou {
    CreateMou {
        title: format!("Agreement {n}"),
        partner_name: format!("Partner {n}"),
        partner_country: "Kenya".to_string(),
        scope_summary: None,
        effective_date: None,
        expiry_date: None,
        document_path: None,
    }
}

fn params(page: i64, limit: i64) -> PageParams {
    PageParams {
        page: Some(page),
        limit: Some(limit),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn last_page_holds_the_remainder(pool: PgPool) {
    let owner = seed_owner(&pool).await;
    for n in 0..25 {
        MouRepo::create(&pool, owner, &mou(n)).await.unwrap();
    }

    let filter = ListFilter::default();
    let first = MouRepo::list(&pool, &filter, &params(1, 10)).await.unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total, 25);

    let third = MouRepo::list(&pool, &filter, &params(3, 10)).await.unwrap();
    assert_eq!(third.items.len(), 5);
    assert_eq!(third.total, 25);

    let beyond = MouRepo::list(&pool, &filter, &params(4, 10)).await.unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total, 25);
}

#[sqlx::test(migrations = "./migrations")]
async fn newest_documents_come_first(pool: PgPool) {
    let owner = seed_owner(&pool).await;
    for n in 0..3 {
        MouRepo::create(&pool, owner, &mou(n)).await.unwrap();
    }

    let page = MouRepo::list(&pool, &ListFilter::default(), &params(1, 10))
        .await
        .unwrap();
    assert_eq!(page.items[0].title, "Agreement 2");
    assert_eq!(page.items[2].title, "Agreement 0");
}

#[sqlx::test(migrations = "./migrations")]
async fn status_and_owner_filters_narrow_results(pool: PgPool) {
    let owner = seed_owner(&pool).await;
    let other = UserRepo::create(
        &pool,
        &CreateUser {
            username: "other".to_string(),
            email: "other@example.edu".to_string(),
            password_hash: "x".to_string(),
            department: None,
        },
    )
    .await
    .unwrap()
    .id;

    for n in 0..4 {
        MouRepo::create(&pool, owner, &mou(n)).await.unwrap();
    }
    MouRepo::create(&pool, other, &mou(99)).await.unwrap();

    let by_owner = ListFilter {
        owner_id: Some(other),
        ..ListFilter::default()
    };
    let page = MouRepo::list(&pool, &by_owner, &params(1, 10)).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].created_by, other);

    let no_match = ListFilter {
        status: Some("approved".to_string()),
        ..ListFilter::default()
    };
    let page = MouRepo::list(&pool, &no_match, &params(1, 10)).await.unwrap();
    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn oversized_limit_is_clamped(pool: PgPool) {
    let owner = seed_owner(&pool).await;
    for n in 0..3 {
        MouRepo::create(&pool, owner, &mou(n)).await.unwrap();
    }

    let page = MouRepo::list(&pool, &ListFilter::default(), &params(1, 10_000))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 3);

    // Nonsense page numbers fall back to the first page.
    let page = MouRepo::list(&pool, &ListFilter::default(), &params(-5, 10))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 3);
}
