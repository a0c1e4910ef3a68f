mod common;

use common::{fixture, FakeServer};
use homefinder::models::{ContactRequest, NewUser, PropertyPayload};
use homefinder::{ApiError, HomeFinderApi, PropertyFilters};
use reqwest::StatusCode;

#[tokio::test]
async fn lists_users_and_resolves_login_by_email() {
    let server = FakeServer::start(fixture()).await;
    let api = server.client();

    let users = api.list_users().await.unwrap();
    assert_eq!(users.len(), 2);

    let bob = api.find_user_by_email("bob@example.com").await.unwrap();
    assert_eq!(bob.user_id, 2);

    let missing = api.find_user_by_email("BOB@example.com").await;
    assert!(matches!(missing, Err(ApiError::UserNotFound)));
}

#[tokio::test]
async fn register_acknowledges_new_user() {
    let server = FakeServer::start(fixture()).await;
    let api = server.client();

    let created = api
        .register(&NewUser {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(created.message.as_deref(), Some("User created"));
    assert_eq!(server.writes(), vec!["POST /users".to_string()]);
}

#[tokio::test]
async fn register_rejection_carries_server_error_text() {
    let server = FakeServer::start(fixture()).await;
    let err = server
        .client()
        .register(&NewUser {
            name: String::new(),
            email: "nobody@example.com".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.server_message(), Some("Name and email are required"));
}

#[tokio::test]
async fn filters_are_sent_as_query_parameters() {
    let server = FakeServer::start(fixture()).await;
    let filters = PropertyFilters {
        min_beds: Some(3),
        max_price: Some(600000.0),
        ..Default::default()
    };

    let properties = server.client().list_properties(&filters).await.unwrap();

    let ids: Vec<i64> = properties.iter().map(|p| p.property_id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(
        server.requests(),
        vec!["GET /properties?min_beds=3&max_price=600000".to_string()]
    );
}

#[tokio::test]
async fn unfiltered_listing_has_no_query_string() {
    let server = FakeServer::start(fixture()).await;
    let properties = server
        .client()
        .list_properties(&PropertyFilters::default())
        .await
        .unwrap();

    assert_eq!(properties.len(), 5);
    assert_eq!(properties[0].type_name.as_deref(), Some("House"));
    assert_eq!(server.requests(), vec!["GET /properties".to_string()]);
}

#[tokio::test]
async fn missing_property_is_a_not_found_error() {
    let server = FakeServer::start(fixture()).await;
    let err = server.client().get_property(404).await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Status { status, .. } if status == StatusCode::NOT_FOUND
    ));
    assert_eq!(err.server_message(), Some("Property not found"));
}

#[tokio::test]
async fn create_update_delete_round() {
    let server = FakeServer::start(fixture()).await;
    let api = server.client();

    let payload = PropertyPayload {
        title: "Garden Flat".to_string(),
        description: "Ground floor with garden".to_string(),
        price: Some(210000.0),
        location: "Shelbyville".to_string(),
        num_bedrooms: Some(2),
        num_bathrooms: Some(1),
        num_garage: Some(0),
        image_url: String::new(),
        user_id: Some(1),
        type_id: Some(2),
    };
    let created = api.create_property(&payload).await.unwrap();
    let id = created.property_id.unwrap();

    let fetched = api.get_property(id).await.unwrap();
    assert_eq!(fetched.title, "Garden Flat");
    assert_eq!(fetched.type_name.as_deref(), Some("Apartment"));

    let renamed = PropertyPayload {
        title: "Garden Flat (reduced)".to_string(),
        price: Some(199000.0),
        ..payload
    };
    api.update_property(id, &renamed).await.unwrap();
    let fetched = api.get_property(id).await.unwrap();
    assert_eq!(fetched.title, "Garden Flat (reduced)");
    assert_eq!(fetched.price, 199000.0);

    api.delete_property(id).await.unwrap();
    let gone = api.get_property(id).await.unwrap_err();
    assert_eq!(gone.server_message(), Some("Property not found"));
}

#[tokio::test]
async fn create_with_uncoerced_number_is_rejected() {
    let server = FakeServer::start(fixture()).await;
    let payload = PropertyPayload {
        title: "Mystery Shack".to_string(),
        location: "Gravity Falls".to_string(),
        num_bedrooms: Some(1),
        num_bathrooms: Some(1),
        num_garage: Some(0),
        ..Default::default()
    };

    let err = server.client().create_property(&payload).await.unwrap_err();
    assert_eq!(err.server_message(), Some("Missing field: 'price'"));
}

#[tokio::test]
async fn duplicate_favorite_surfaces_server_message() {
    let server = FakeServer::start(fixture()).await;
    let api = server.client();

    api.add_favorite(1, 2).await.unwrap();
    let err = api.add_favorite(1, 2).await.unwrap_err();
    assert_eq!(err.server_message(), Some("Already in favorites"));

    let favorites = api.list_favorites(1).await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].property_id, 2);
}

#[tokio::test]
async fn lists_property_types() {
    let server = FakeServer::start(fixture()).await;
    let types = server.client().list_property_types().await.unwrap();
    let names: Vec<&str> = types.iter().map(|t| t.type_name.as_str()).collect();
    assert_eq!(names, vec!["House", "Apartment", "Condo"]);
}

#[tokio::test]
async fn contact_request_is_delivered() {
    let server = FakeServer::start(fixture()).await;
    server
        .client()
        .create_contact_request(&ContactRequest {
            name: "Erin".to_string(),
            email: "erin@example.com".to_string(),
            phone: None,
            message: "Can I visit on Saturday?".to_string(),
            property_id: 3,
        })
        .await
        .unwrap();

    server.with(|backend| {
        assert_eq!(backend.contact_requests.len(), 1);
        assert_eq!(backend.contact_requests[0].property_id, 3);
    });
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let api = homefinder::ApiClient::with_timeout(
        "http://127.0.0.1:9",
        std::time::Duration::from_secs(2),
    )
    .unwrap();

    let err = api.list_users().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
