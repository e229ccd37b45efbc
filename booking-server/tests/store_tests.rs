/// Integration tests for the SQLite stores
/// Runs against a temporary database file with the real schema.

use booking_core::assemble_offers;
use booking_server::db;
use booking_server::store::{
    booking::NewBooking, BookingStore, DistrictStore, DocumentStore, DroppingPointStore,
    ProviderStore, RouteStore,
};
use sqlx::SqlitePool;
use tempfile::TempDir;

async fn test_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
    let pool = db::connect(&url).await.unwrap();
    db::init_schema(&pool).await.unwrap();
    (dir, pool)
}

fn booking(name: &str, phone: &str) -> NewBooking {
    NewBooking {
        customer_name: name.to_string(),
        customer_phone: phone.to_string(),
        from_district: "Dhaka".to_string(),
        to_district: "Sylhet".to_string(),
        dropping_point: "Kadamtali".to_string(),
        bus_provider: "Hanif".to_string(),
        travel_date: "2026-09-15".to_string(),
        fare: 650,
    }
}

#[tokio::test]
async fn test_booking_lifecycle() {
    let (_dir, pool) = test_pool().await;
    let bookings = BookingStore::new(pool);

    let reference = bookings.create(&booking("Rahim", "01711111111")).await.unwrap();
    assert_eq!(reference.len(), 8);

    let stored = bookings
        .get_by_reference_and_phone(&reference, "01711111111")
        .await
        .unwrap()
        .expect("booking should exist");
    assert_eq!(stored.status, "confirmed");
    assert_eq!(stored.fare, 650);

    // Wrong phone behaves like not-found
    let mismatch = bookings
        .get_by_reference_and_phone(&reference, "01799999999")
        .await
        .unwrap();
    assert!(mismatch.is_none());

    let cancelled = bookings.cancel(&reference, "01711111111").await.unwrap();
    assert!(cancelled);

    let stored = bookings
        .get_by_reference_and_phone(&reference, "01711111111")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, "cancelled");
}

#[tokio::test]
async fn test_bookings_listed_by_phone() {
    let (_dir, pool) = test_pool().await;
    let bookings = BookingStore::new(pool);

    bookings.create(&booking("Rahim", "01711111111")).await.unwrap();
    bookings.create(&booking("Rahim", "01711111111")).await.unwrap();
    bookings.create(&booking("Karim", "01722222222")).await.unwrap();

    let listed = bookings.get_by_phone("01711111111").await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|b| b.customer_phone == "01711111111"));
}

#[tokio::test]
async fn test_failed_statement_does_not_exhaust_pool() {
    let (_dir, pool) = test_pool().await;
    let districts = DistrictStore::new(pool);

    districts.create("Dhaka").await.unwrap();

    // The pool holds at most 5 connections. A connection leaked on an
    // error path would exhaust it after a handful of failures.
    for _ in 0..10 {
        let duplicate = districts.create("Dhaka").await;
        assert!(duplicate.is_err());
    }

    // Pool still serves requests after repeated failures
    let all = districts.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_providers_serving_district_join() {
    let (_dir, pool) = test_pool().await;
    let districts = DistrictStore::new(pool.clone());
    let providers = ProviderStore::new(pool.clone());
    let routes = RouteStore::new(pool);

    let dhaka = districts.create("Dhaka").await.unwrap();
    let sylhet = districts.create("Sylhet").await.unwrap();
    let hanif = providers.create("Hanif", "", "", "").await.unwrap();
    let ena = providers.create("Ena", "", "", "").await.unwrap();

    routes.create(hanif, dhaka).await.unwrap();
    routes.create(hanif, sylhet).await.unwrap();
    routes.create(ena, dhaka).await.unwrap();

    let serving_sylhet = providers.get_serving_district("Sylhet").await.unwrap();
    assert_eq!(serving_sylhet.len(), 1);
    assert_eq!(serving_sylhet[0].name, "Hanif");

    let serving_dhaka = providers.get_serving_district("Dhaka").await.unwrap();
    assert_eq!(serving_dhaka.len(), 2);
}

#[tokio::test]
async fn test_search_intersection_end_to_end() {
    // P1 serves {A, B}, P2 serves {B, C}: A -> C has no shared provider,
    // A -> B is served by P1 only.
    let (_dir, pool) = test_pool().await;
    let districts = DistrictStore::new(pool.clone());
    let providers = ProviderStore::new(pool.clone());
    let routes = RouteStore::new(pool.clone());
    let points = DroppingPointStore::new(pool);

    let a = districts.create("A").await.unwrap();
    let b = districts.create("B").await.unwrap();
    let c = districts.create("C").await.unwrap();
    let p1 = providers.create("P1", "", "", "").await.unwrap();
    let p2 = providers.create("P2", "", "", "").await.unwrap();

    routes.create(p1, a).await.unwrap();
    routes.create(p1, b).await.unwrap();
    routes.create(p2, b).await.unwrap();
    routes.create(p2, c).await.unwrap();

    points.create(b, "Central", 300).await.unwrap();
    points.create(c, "Harbour", 500).await.unwrap();

    let from_a = providers.get_serving_district("A").await.unwrap();
    let to_c = providers.get_serving_district("C").await.unwrap();
    let c_points = points.get_by_district_name("C").await.unwrap();
    let offers = assemble_offers("A", "C", &from_a, &to_c, &c_points, None);
    assert!(offers.is_empty());

    let to_b = providers.get_serving_district("B").await.unwrap();
    let b_points = points.get_by_district_name("B").await.unwrap();
    let offers = assemble_offers("A", "B", &from_a, &to_b, &b_points, None);
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].provider, "P1");
    assert_eq!(offers[0].dropping_point, "Central");
}

#[tokio::test]
async fn test_document_substring_search_with_limit() {
    let (_dir, pool) = test_pool().await;
    let documents = DocumentStore::new(pool);

    for i in 0..5 {
        documents
            .create("Hanif", &format!("Cancellation Policy: variant {}", i))
            .await
            .unwrap();
    }
    documents
        .create("Ena", "Contact Information: +880 1700-000003")
        .await
        .unwrap();

    let found = documents.search("Cancellation Policy", 3).await.unwrap();
    assert_eq!(found.len(), 3);

    let none = documents.search("Luggage Policy", 3).await.unwrap();
    assert!(none.is_empty());
}
