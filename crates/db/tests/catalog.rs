//! Integration tests for the ghazal and quote repositories.

use faal_core::search::{contains_pattern, SearchIn};
use faal_db::models::ghazal::{CreateGhazal, GhazalSearch};
use faal_db::models::quote::CreateQuote;
use faal_db::repositories::{GhazalRepo, QuoteRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_ghazal(number: i32, persian: &str, translation: Option<&str>) -> CreateGhazal {
    CreateGhazal {
        ghazal_number: number,
        persian_text: persian.to_string(),
        english_translation: translation.map(str::to_string),
    }
}

fn new_quote(text: &str, daily: bool) -> CreateQuote {
    CreateQuote {
        text: text.to_string(),
        author: "حافظ شیرازی".to_string(),
        is_daily_quote: daily,
    }
}

fn search(pattern: Option<&str>, search_in: SearchIn) -> GhazalSearch {
    GhazalSearch {
        pattern: pattern.and_then(contains_pattern),
        search_in,
        min_number: None,
        max_number: None,
        limit: 50,
        offset: 0,
    }
}

async fn seed_ghazals(pool: &PgPool) {
    for (n, persian, translation) in [
        (3, "سه", Some("the cupbearer")),
        (1, "الا یا ایها الساقی", Some("O cupbearer, pass the cup")),
        (2, "صلاح کار کجا", None),
        (12, "دوازده", Some("twelve")),
    ] {
        GhazalRepo::create_if_absent(pool, &new_ghazal(n, persian, translation))
            .await
            .unwrap()
            .expect("fresh number should insert");
    }
}

// ---------------------------------------------------------------------------
// Ghazals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_ghazal_insert_is_idempotent_by_number(pool: PgPool) {
    let first = GhazalRepo::create_if_absent(&pool, &new_ghazal(1, "original", None))
        .await
        .unwrap();
    assert!(first.is_some());

    let second = GhazalRepo::create_if_absent(&pool, &new_ghazal(1, "replacement", None))
        .await
        .unwrap();
    assert!(second.is_none());

    let stored = GhazalRepo::find_by_number(&pool, 1).await.unwrap().unwrap();
    assert_eq!(stored.persian_text, "original");
    assert_eq!(GhazalRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_at_index_follows_number_order(pool: PgPool) {
    seed_ghazals(&pool).await;

    let numbers: Vec<i32> = {
        let mut out = Vec::new();
        for i in 0..4 {
            out.push(
                GhazalRepo::find_at_index(&pool, i)
                    .await
                    .unwrap()
                    .unwrap()
                    .ghazal_number,
            );
        }
        out
    };
    assert_eq!(numbers, vec![1, 2, 3, 12]);
    assert!(GhazalRepo::find_at_index(&pool, 4).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_by_text_and_scope(pool: PgPool) {
    seed_ghazals(&pool).await;

    let all = GhazalRepo::search(&pool, &search(Some("CUPBEARER"), SearchIn::All))
        .await
        .unwrap();
    let numbers: Vec<_> = all.iter().map(|g| g.ghazal_number).collect();
    assert_eq!(numbers, vec![1, 3]);

    let persian_only = GhazalRepo::search(&pool, &search(Some("cupbearer"), SearchIn::Persian))
        .await
        .unwrap();
    assert!(persian_only.is_empty());

    let by_persian = GhazalRepo::search(&pool, &search(Some("الساقی"), SearchIn::Persian))
        .await
        .unwrap();
    assert_eq!(by_persian.len(), 1);
    assert_eq!(by_persian[0].ghazal_number, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_matches_number_text_only_in_all_scope(pool: PgPool) {
    seed_ghazals(&pool).await;

    let all = GhazalRepo::search(&pool, &search(Some("2"), SearchIn::All))
        .await
        .unwrap();
    let numbers: Vec<_> = all.iter().map(|g| g.ghazal_number).collect();
    assert_eq!(numbers, vec![2, 12]);

    let translation = GhazalRepo::search(&pool, &search(Some("2"), SearchIn::Translation))
        .await
        .unwrap();
    assert!(translation.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_number_range_and_paging(pool: PgPool) {
    seed_ghazals(&pool).await;

    let mut params = search(None, SearchIn::All);
    params.min_number = Some(2);
    params.max_number = Some(12);
    params.limit = 2;
    let page_one = GhazalRepo::search(&pool, &params).await.unwrap();
    params.offset = 2;
    let page_two = GhazalRepo::search(&pool, &params).await.unwrap();

    let one: Vec<_> = page_one.iter().map(|g| g.ghazal_number).collect();
    let two: Vec<_> = page_two.iter().map(|g| g.ghazal_number).collect();
    assert_eq!(one, vec![2, 3]);
    assert_eq!(two, vec![12]);
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_quote_counts_and_daily_index(pool: PgPool) {
    for (text, daily) in [("a", false), ("b", true), ("c", false), ("d", true)] {
        QuoteRepo::create_if_absent(&pool, &new_quote(text, daily))
            .await
            .unwrap()
            .unwrap();
    }

    assert_eq!(QuoteRepo::counts(&pool).await.unwrap(), (2, 4));

    let second_daily = QuoteRepo::find_daily_at_index(&pool, 1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second_daily.text, "d");

    let third = QuoteRepo::find_at_index(&pool, 2).await.unwrap().unwrap();
    assert_eq!(third.text, "c");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_quote_text_is_skipped(pool: PgPool) {
    assert!(QuoteRepo::create_if_absent(&pool, &new_quote("same", false))
        .await
        .unwrap()
        .is_some());
    assert!(QuoteRepo::create_if_absent(&pool, &new_quote("same", true))
        .await
        .unwrap()
        .is_none());

    let listed = QuoteRepo::list(&pool, 10, 0).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(!listed[0].is_daily_quote);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_long_quote_text_is_stored_and_deduplicated(pool: PgPool) {
    // Low-redundancy text so compression cannot bring it under the btree row limit.
    let mut state: u32 = 0x2545_f491;
    let text: String = (0..12_000)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            char::from(b'a' + (state % 26) as u8)
        })
        .collect();

    let stored = QuoteRepo::create_if_absent(&pool, &new_quote(&text, false))
        .await
        .unwrap()
        .expect("long quote should be inserted");
    assert_eq!(stored.text, text);

    assert!(QuoteRepo::create_if_absent(&pool, &new_quote(&text, false))
        .await
        .unwrap()
        .is_none());
    assert_eq!(QuoteRepo::counts(&pool).await.unwrap().1, 1);
}
