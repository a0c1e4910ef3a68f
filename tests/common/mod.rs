// In-process stand-in for the HomeFinder REST service.
//
// Serves the same endpoints with the same status codes and error bodies as
// the real backend, keeps everything in memory and records every request
// line so tests can assert which calls were (or were not) made.

#![allow(dead_code)]

use axum::extract::{Path, Query, Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use homefinder::models::{ContactRequest, Property, PropertyType, User};
use homefinder::ApiClient;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct Backend {
    pub users: Vec<User>,
    pub types: Vec<PropertyType>,
    pub properties: Vec<Property>,
    /// (user_id, property_id)
    pub favorites: Vec<(i64, i64)>,
    pub contact_requests: Vec<ContactRequest>,
    /// "METHOD /path?query" for every request received
    pub requests: Vec<String>,
    /// Canned replies keyed by "METHOD /path", served instead of the route
    rejections: HashMap<String, (StatusCode, Value)>,
    next_id: i64,
}

impl Backend {
    /// Answer `line` (e.g. "POST /contact-requests") with `status` and `body`
    pub fn reject(mut self, line: &str, status: StatusCode, body: Value) -> Self {
        self.rejections.insert(line.to_string(), (status, body));
        self
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn with_type_name(&self, mut property: Property) -> Property {
        property.type_name = property
            .type_id
            .and_then(|id| self.types.iter().find(|t| t.type_id == id))
            .map(|t| t.type_name.clone());
        property
    }
}

type Shared = Arc<Mutex<Backend>>;

pub struct FakeServer {
    pub url: String,
    state: Shared,
}

impl FakeServer {
    pub async fn start(backend: Backend) -> Self {
        let state: Shared = Arc::new(Mutex::new(backend));

        let app = Router::new()
            .route("/users", get(list_users).post(create_user))
            .route("/properties", get(list_properties).post(create_property))
            .route("/properties/types", get(list_types))
            .route(
                "/properties/:id",
                get(get_property).put(update_property).delete(delete_property),
            )
            .route("/favorites", post(add_favorite))
            .route("/favorites/:user_id", get(list_favorites))
            .route("/contact-requests", post(create_contact_request))
            .layer(middleware::from_fn_with_state(state.clone(), record))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}"),
            state,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::with_timeout(&self.url, Duration::from_secs(5)).unwrap()
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Every request that could have changed server state
    pub fn writes(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|line| !line.starts_with("GET "))
            .collect()
    }

    pub fn with<T>(&self, f: impl FnOnce(&Backend) -> T) -> T {
        f(&self.state.lock().unwrap())
    }
}

async fn record(State(state): State<Shared>, request: Request, next: Next) -> Response {
    let line = format!("{} {}", request.method(), request.uri());
    let key = format!("{} {}", request.method(), request.uri().path());
    let rejection = {
        let mut backend = state.lock().unwrap();
        backend.requests.push(line);
        backend.rejections.get(&key).cloned()
    };

    match rejection {
        Some((status, body)) => (status, Json(body)).into_response(),
        None => next.run(request).await,
    }
}

fn error(status: StatusCode, key: &str, message: &str) -> Response {
    (status, Json(json!({ key: message }))).into_response()
}

async fn list_users(State(state): State<Shared>) -> Json<Vec<User>> {
    Json(state.lock().unwrap().users.clone())
}

async fn create_user(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let name = body["name"].as_str().unwrap_or_default().to_string();
    let email = body["email"].as_str().unwrap_or_default().to_string();
    if name.is_empty() || email.is_empty() {
        return error(StatusCode::BAD_REQUEST, "error", "Name and email are required");
    }

    let mut backend = state.lock().unwrap();
    let user_id = backend.next_id();
    backend.users.push(User {
        user_id,
        name,
        email,
    });
    (
        StatusCode::CREATED,
        Json(json!({ "message": "User created", "user_id": user_id })),
    )
        .into_response()
}

async fn list_types(State(state): State<Shared>) -> Json<Vec<PropertyType>> {
    Json(state.lock().unwrap().types.clone())
}

/// Filters behave like the real service: unparsable or zero values are skipped
async fn list_properties(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Property>> {
    let int = |key: &str| params.get(key).and_then(|v| v.parse::<i64>().ok()).filter(|v| *v != 0);
    let float = |key: &str| {
        params
            .get(key)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| *v != 0.0)
    };

    let backend = state.lock().unwrap();
    let matches = |p: &Property| {
        int("type_id").map_or(true, |t| p.type_id == Some(t))
            && int("min_beds").map_or(true, |v| p.num_bedrooms >= v)
            && int("max_beds").map_or(true, |v| p.num_bedrooms <= v)
            && int("min_baths").map_or(true, |v| p.num_bathrooms >= v)
            && int("max_baths").map_or(true, |v| p.num_bathrooms <= v)
            && int("min_garage").map_or(true, |v| p.num_garage >= v)
            && int("max_garage").map_or(true, |v| p.num_garage <= v)
            && float("min_price").map_or(true, |v| p.price >= v)
            && float("max_price").map_or(true, |v| p.price <= v)
    };

    Json(
        backend
            .properties
            .iter()
            .filter(|p| matches(p))
            .map(|p| backend.with_type_name(p.clone()))
            .collect(),
    )
}

async fn get_property(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let backend = state.lock().unwrap();
    match backend.properties.iter().find(|p| p.property_id == id) {
        Some(p) => Json(backend.with_type_name(p.clone())).into_response(),
        None => error(StatusCode::NOT_FOUND, "error", "Property not found"),
    }
}

async fn create_property(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let required = [
        "title",
        "price",
        "location",
        "num_bedrooms",
        "num_bathrooms",
        "num_garage",
    ];
    if let Some(missing) = required.iter().find(|key| body[**key].is_null()) {
        return error(
            StatusCode::BAD_REQUEST,
            "error",
            &format!("Missing field: '{missing}'"),
        );
    }

    let mut backend = state.lock().unwrap();
    let property_id = backend.next_id();
    backend.properties.push(Property {
        property_id,
        title: body["title"].as_str().unwrap_or_default().to_string(),
        description: body["description"].as_str().map(str::to_string),
        price: body["price"].as_f64().unwrap_or_default(),
        location: body["location"].as_str().unwrap_or_default().to_string(),
        num_bedrooms: body["num_bedrooms"].as_i64().unwrap_or_default(),
        num_bathrooms: body["num_bathrooms"].as_i64().unwrap_or_default(),
        num_garage: body["num_garage"].as_i64().unwrap_or_default(),
        image_url: body["image_url"].as_str().map(str::to_string),
        user_id: body["user_id"].as_i64(),
        type_id: body["type_id"].as_i64(),
        type_name: None,
        agent_email: None,
        agent_phone: None,
        created_at: None,
    });
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Property created", "property_id": property_id })),
    )
        .into_response()
}

async fn update_property(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    let Some(p) = backend.properties.iter_mut().find(|p| p.property_id == id) else {
        return error(StatusCode::NOT_FOUND, "error", "Property not found");
    };

    if let Some(title) = body["title"].as_str() {
        p.title = title.to_string();
    }
    if let Some(description) = body["description"].as_str() {
        p.description = Some(description.to_string());
    }
    if let Some(price) = body["price"].as_f64() {
        p.price = price;
    }
    if let Some(location) = body["location"].as_str() {
        p.location = location.to_string();
    }
    if let Some(beds) = body["num_bedrooms"].as_i64() {
        p.num_bedrooms = beds;
    }
    if let Some(baths) = body["num_bathrooms"].as_i64() {
        p.num_bathrooms = baths;
    }
    if let Some(garage) = body["num_garage"].as_i64() {
        p.num_garage = garage;
    }
    Json(json!({ "message": "Property updated" })).into_response()
}

async fn delete_property(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut backend = state.lock().unwrap();
    let before = backend.properties.len();
    backend.properties.retain(|p| p.property_id != id);
    if backend.properties.len() == before {
        return error(StatusCode::NOT_FOUND, "error", "Property not found");
    }
    backend.favorites.retain(|(_, property_id)| *property_id != id);
    Json(json!({ "message": "Property deleted" })).into_response()
}

async fn list_favorites(State(state): State<Shared>, Path(user_id): Path<i64>) -> Json<Vec<Property>> {
    let backend = state.lock().unwrap();
    let favorites = backend
        .favorites
        .iter()
        .filter(|(uid, _)| *uid == user_id)
        .filter_map(|(_, pid)| backend.properties.iter().find(|p| p.property_id == *pid))
        .cloned()
        .collect();
    Json(favorites)
}

async fn add_favorite(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let user_id = body["user_id"].as_i64().unwrap_or_default();
    let property_id = body["property_id"].as_i64().unwrap_or_default();

    let mut backend = state.lock().unwrap();
    if backend.favorites.contains(&(user_id, property_id)) {
        return error(StatusCode::BAD_REQUEST, "message", "Already in favorites");
    }
    backend.favorites.push((user_id, property_id));
    let favorite_id = backend.next_id();
    (
        StatusCode::CREATED,
        Json(json!({ "favorite_id": favorite_id, "property_id": property_id })),
    )
        .into_response()
}

async fn create_contact_request(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let text = |key: &str| body[key].as_str().filter(|s| !s.is_empty()).map(str::to_string);
    let (Some(name), Some(email), Some(message), Some(property_id)) = (
        text("name"),
        text("email"),
        text("message"),
        body["property_id"].as_i64(),
    ) else {
        return error(StatusCode::BAD_REQUEST, "error", "Missing required fields");
    };

    state.lock().unwrap().contact_requests.push(ContactRequest {
        name,
        email,
        phone: text("phone"),
        message,
        property_id,
    });
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Contact request sent successfully" })),
    )
        .into_response()
}

pub fn user(user_id: i64, name: &str, email: &str) -> User {
    User {
        user_id,
        name: name.to_string(),
        email: email.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn listing(
    property_id: i64,
    title: &str,
    price: f64,
    beds: i64,
    baths: i64,
    garage: i64,
    user_id: i64,
    type_id: i64,
) -> Property {
    Property {
        property_id,
        title: title.to_string(),
        description: Some(format!("{title} in great condition.")),
        price,
        location: "Springfield".to_string(),
        num_bedrooms: beds,
        num_bathrooms: baths,
        num_garage: garage,
        image_url: None,
        user_id: Some(user_id),
        type_id: Some(type_id),
        type_name: None,
        agent_email: None,
        agent_phone: None,
        created_at: None,
    }
}

/// Two users, three types and five listings with 1–5 bedrooms
pub fn fixture() -> Backend {
    let mut estate = listing(5, "Hilltop Estate", 1_150_000.0, 5, 4, 3, 2, 1);
    estate.agent_email = Some("agent@hilltop.example".to_string());
    estate.agent_phone = Some("(555) 010-2030".to_string());

    Backend {
        users: vec![
            user(1, "Alice", "alice@example.com"),
            user(2, "Bob", "bob@example.com"),
        ],
        types: vec![
            PropertyType {
                type_id: 1,
                type_name: "House".to_string(),
            },
            PropertyType {
                type_id: 2,
                type_name: "Apartment".to_string(),
            },
            PropertyType {
                type_id: 3,
                type_name: "Condo".to_string(),
            },
        ],
        properties: vec![
            listing(1, "Maple Street Family Home", 525_000.0, 4, 3, 2, 1, 1),
            listing(2, "Downtown Studio", 189_000.0, 1, 1, 0, 2, 2),
            listing(3, "Riverside Condo", 340_000.0, 3, 2, 1, 1, 3),
            listing(4, "Suburban Starter", 265_000.0, 2, 1, 1, 2, 1),
            estate,
        ],
        next_id: 100,
        ..Default::default()
    }
}

pub fn method_is(line: &str, method: Method) -> bool {
    line.starts_with(&format!("{method} "))
}
