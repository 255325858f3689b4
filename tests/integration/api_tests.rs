//! API integration tests
//!
//! Run against a live server whose catalog lookups point back at itself.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000";

/// Helper to create a book and return its id
async fn create_book(client: &Client, quantity: i32) -> String {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "book_category": "integration",
            "book_quantity": quantity,
            "name": "Integration Test Book"
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse create response");
    body["inserted_id"].as_str().expect("No inserted_id").to_string()
}

fn borrow_body(email: &str, book_id: &str) -> Value {
    json!({
        "user_email": email,
        "book_id": book_id,
        "borrowed_date": "2023-11-01",
        "return_date": "2023-11-15"
    })
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_get_book_invalid_and_missing() {
    let client = Client::new();

    let response = client
        .get(format!("{}/book/not-an-id", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let response = client
        .get(format!("{}/book/00000000-0000-0000-0000-000000000000", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_update_quantity() {
    let client = Client::new();
    let book_id = create_book(&client, 2).await;

    let response = client
        .put(format!("{}/book/{}", BASE_URL, book_id))
        .json(&json!({ "book_quantity": 1 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let book: Value = client
        .get(format!("{}/book/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(book["book_quantity"], 1);
}

#[tokio::test]
#[ignore]
async fn test_borrow_cycle() {
    let client = Client::new();
    let book_id = create_book(&client, 1).await;
    let email = format!("it-{}@example.com", book_id);

    let response = client
        .post(format!("{}/borrowed", BASE_URL))
        .json(&borrow_body(&email, &book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let loan_id = body["inserted_id"].as_str().expect("No inserted_id").to_string();

    let response = client
        .post(format!("{}/borrowed", BASE_URL))
        .json(&borrow_body(&email, &book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Book Already Borrowed.");

    let loans: Value = client
        .get(format!("{}/borrowed/{}", BASE_URL, email))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(loans.as_array().map(Vec::len), Some(1));
    assert_eq!(loans[0]["borrowed_id"], loan_id.as_str());
    assert_eq!(loans[0]["name"], "Integration Test Book");

    let response = client
        .delete(format!("{}/borrowed/{}", BASE_URL, loan_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .delete(format!("{}/borrowed/{}", BASE_URL, loan_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["deleted_count"], 0);
}
