//! API Integration Tests
//!
//! Each test spawns its own server on a fresh in-memory store. The
//! PostgreSQL smoke test additionally needs DATABASE_URL.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, postgres_config, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Favorite Tests
// ============================================================================

#[tokio::test]
async fn test_favorite_lifecycle_end_to_end() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Add
    let response = server
        .post("/api/v1/favorites", &AddFavoriteRequest::new("nimbus"))
        .await
        .unwrap();
    let favorite: FavoriteResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(favorite.word, "nimbus");

    let response = server.get("/api/v1/notifications").await.unwrap();
    let notifications: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].notification_type, "like");
    assert_eq!(
        notifications[0].message,
        "The word \"nimbus\" has been added to favorites!"
    );

    // Remove
    let response = server.delete("/api/v1/favorites/nimbus").await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get("/api/v1/favorites").await.unwrap();
    let favorites: Vec<FavoriteResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(favorites.is_empty());

    let response = server.get("/api/v1/notifications").await.unwrap();
    let notifications: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let kinds: Vec<&str> = notifications
        .iter()
        .map(|n| n.notification_type.as_str())
        .collect();
    assert_eq!(kinds, vec!["unlike", "like"]);
    assert_eq!(
        notifications[0].message,
        "The word \"nimbus\" has been removed from favorites."
    );
    assert!(notifications[0].id > notifications[1].id);
}

#[tokio::test]
async fn test_add_existing_favorite_returns_ok() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = AddFavoriteRequest::unique();

    let response = server.post("/api/v1/favorites", &request).await.unwrap();
    let first: FavoriteResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/v1/favorites", &request).await.unwrap();
    let second: FavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(first.word, second.word);
    assert_eq!(first.created_at, second.created_at);

    // Only one like recorded
    let response = server.get("/api/v1/notifications").await.unwrap();
    let notifications: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(notifications.len(), 1);
}

#[tokio::test]
async fn test_add_favorite_validation() {
    let server = TestServer::start().await.expect("Failed to start server");

    for body in [json!({}), json!({"word": null}), json!({"word": ""})] {
        let response = server.post("/api/v1/favorites", &body).await.unwrap();
        let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(error.error.code, "VALIDATION_ERROR");
        assert!(!error.error.message.is_empty());
    }

    let too_long = AddFavoriteRequest::new("x".repeat(101));
    let response = server.post("/api/v1/favorites", &too_long).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Nothing was recorded
    let response = server.get("/api/v1/notifications").await.unwrap();
    let notifications: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(notifications.is_empty());
}

#[tokio::test]
async fn test_remove_unknown_favorite() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.delete("/api/v1/favorites/ghost").await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_FAVORITE");

    let response = server.get("/api/v1/notifications").await.unwrap();
    let notifications: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(notifications.is_empty());
}

#[tokio::test]
async fn test_get_favorite() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .post("/api/v1/favorites", &AddFavoriteRequest::new("cat"))
        .await
        .unwrap();

    let response = server.get("/api/v1/favorites/cat").await.unwrap();
    let favorite: FavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(favorite.word, "cat");

    // Lookup is case-sensitive
    let response = server.get("/api/v1/favorites/Cat").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_favorites_newest_first_and_search() {
    let server = TestServer::start().await.expect("Failed to start server");

    for word in ["rain", "sun", "brain"] {
        let response = server
            .post("/api/v1/favorites", &AddFavoriteRequest::new(word))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
        // Distinct creation timestamps
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let response = server.get("/api/v1/favorites").await.unwrap();
    let favorites: Vec<FavoriteResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let words: Vec<&str> = favorites.iter().map(|f| f.word.as_str()).collect();
    assert_eq!(words, vec!["brain", "sun", "rain"]);

    let response = server.get("/api/v1/favorites?search=RAIN").await.unwrap();
    let favorites: Vec<FavoriteResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let words: Vec<&str> = favorites.iter().map(|f| f.word.as_str()).collect();
    assert_eq!(words, vec!["brain", "rain"]);
}

#[tokio::test]
async fn test_clear_favorites() {
    let server = TestServer::start().await.expect("Failed to start server");

    for word in ["a", "b"] {
        server
            .post("/api/v1/favorites", &AddFavoriteRequest::new(word))
            .await
            .unwrap();
    }

    let response = server.delete("/api/v1/favorites").await.unwrap();
    let cleared: ClearFavoritesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cleared.removed, 2);

    let response = server
        .get("/api/v1/notifications?notification_type=unlike")
        .await
        .unwrap();
    let unlikes: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unlikes.len(), 2);
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_list_notifications_filters() {
    let server = TestServer::start().await.expect("Failed to start server");

    for word in ["cat", "dog"] {
        server
            .post("/api/v1/favorites", &AddFavoriteRequest::new(word))
            .await
            .unwrap();
    }
    server.delete("/api/v1/favorites/cat").await.unwrap();

    let response = server
        .get("/api/v1/notifications?notification_type=like&search=cat")
        .await
        .unwrap();
    let notifications: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].word, "cat");
    assert_eq!(notifications[0].notification_type, "like");

    // Search also matches the message text
    let response = server.get("/api/v1/notifications?search=removed").await.unwrap();
    let notifications: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].notification_type, "unlike");

    let response = server
        .get("/api/v1/notifications?notification_type=love")
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_QUERY_PARAMETER");
}

// ============================================================================
// PostgreSQL Backend
// ============================================================================

#[tokio::test]
async fn test_postgres_backend_round_trip() {
    let Some(config) = postgres_config() else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    let request = AddFavoriteRequest::unique();

    let response = server.post("/api/v1/favorites", &request).await.unwrap();
    let created: FavoriteResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The stored timestamp matches the one returned on creation
    let path = format!("/api/v1/favorites/{}", request.word);
    let response = server.get(&path).await.unwrap();
    let fetched: FavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.created_at, created.created_at);

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/notifications?search={}", request.word))
        .await
        .unwrap();
    let notifications: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let kinds: Vec<&str> = notifications
        .iter()
        .map(|n| n.notification_type.as_str())
        .collect();
    assert_eq!(kinds, vec!["unlike", "like"]);
}
