use crate::api::error::{ApiError, ApiResult};
use crate::api::traits::HomeFinderApi;
use crate::api::types::PropertyFilters;
use crate::config::Config;
use crate::models::{
    ContactRequest, Created, Favorite, NewFavorite, NewUser, Property, PropertyPayload,
    PropertyType, User,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP implementation of [`HomeFinderApi`]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the service described by `config`
    pub fn new(config: &Config) -> ApiResult<Self> {
        Self::with_timeout(&config.api_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("homefinder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and hand back the body of a successful response
    async fn send(&self, request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Backend returned status: {}", status);
            let (message, error) = error_fields(&body);
            return Err(ApiError::Status {
                status,
                message,
                error,
            });
        }

        debug!("Received {} bytes", body.len());
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let body = self.send(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// The `message` and `error` fields of a JSON error body
fn error_fields(body: &str) -> (Option<String>, Option<String>) {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return (None, None);
    };
    let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
    (field("message"), field("error"))
}

#[async_trait]
impl HomeFinderApi for ApiClient {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        debug!("GET /users");
        self.fetch(self.client.get(self.url("/users"))).await
    }

    async fn register(&self, user: &NewUser) -> ApiResult<Created> {
        debug!("POST /users for {}", user.email);
        self.fetch(self.client.post(self.url("/users")).json(user))
            .await
    }

    async fn list_properties(&self, filters: &PropertyFilters) -> ApiResult<Vec<Property>> {
        let query = filters.to_query();
        debug!("GET /properties with {} filters", query.len());
        self.fetch(self.client.get(self.url("/properties")).query(&query))
            .await
    }

    async fn get_property(&self, id: i64) -> ApiResult<Property> {
        debug!("GET /properties/{}", id);
        self.fetch(self.client.get(self.url(&format!("/properties/{id}"))))
            .await
    }

    async fn create_property(&self, property: &PropertyPayload) -> ApiResult<Created> {
        debug!("POST /properties");
        self.fetch(self.client.post(self.url("/properties")).json(property))
            .await
    }

    async fn update_property(&self, id: i64, property: &PropertyPayload) -> ApiResult<()> {
        debug!("PUT /properties/{}", id);
        self.send(
            self.client
                .put(self.url(&format!("/properties/{id}")))
                .json(property),
        )
        .await
        .map(|_| ())
    }

    async fn delete_property(&self, id: i64) -> ApiResult<()> {
        debug!("DELETE /properties/{}", id);
        self.send(self.client.delete(self.url(&format!("/properties/{id}"))))
            .await
            .map(|_| ())
    }

    async fn list_property_types(&self) -> ApiResult<Vec<PropertyType>> {
        debug!("GET /properties/types");
        self.fetch(self.client.get(self.url("/properties/types")))
            .await
    }

    async fn list_favorites(&self, user_id: i64) -> ApiResult<Vec<Favorite>> {
        debug!("Fetching favorites for user {}", user_id);
        self.fetch(self.client.get(self.url(&format!("/favorites/{user_id}"))))
            .await
    }

    async fn add_favorite(&self, user_id: i64, property_id: i64) -> ApiResult<Created> {
        debug!("Adding favorite: user_id={}, property_id={}", user_id, property_id);
        let body = NewFavorite {
            user_id,
            property_id,
        };
        self.fetch(self.client.post(self.url("/favorites")).json(&body))
            .await
    }

    async fn create_contact_request(&self, request: &ContactRequest) -> ApiResult<Created> {
        debug!("POST /contact-requests for property {}", request.property_id);
        self.fetch(self.client.post(self.url("/contact-requests")).json(request))
            .await
    }
}
