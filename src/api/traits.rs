use crate::api::error::{ApiError, ApiResult};
use crate::api::types::PropertyFilters;
use crate::models::{
    ContactRequest, Created, Favorite, NewUser, Property, PropertyPayload, PropertyType, User,
};
use async_trait::async_trait;

/// Operations offered by the HomeFinder REST service.
///
/// Pages only talk to the backend through this trait, so a different
/// transport can be slotted in without touching them.
#[async_trait]
pub trait HomeFinderApi: Send + Sync {
    async fn list_users(&self) -> ApiResult<Vec<User>>;

    async fn register(&self, user: &NewUser) -> ApiResult<Created>;

    async fn list_properties(&self, filters: &PropertyFilters) -> ApiResult<Vec<Property>>;

    async fn get_property(&self, id: i64) -> ApiResult<Property>;

    async fn create_property(&self, property: &PropertyPayload) -> ApiResult<Created>;

    async fn update_property(&self, id: i64, property: &PropertyPayload) -> ApiResult<()>;

    async fn delete_property(&self, id: i64) -> ApiResult<()>;

    async fn list_property_types(&self) -> ApiResult<Vec<PropertyType>>;

    async fn list_favorites(&self, user_id: i64) -> ApiResult<Vec<Favorite>>;

    async fn add_favorite(&self, user_id: i64, property_id: i64) -> ApiResult<Created>;

    async fn create_contact_request(&self, request: &ContactRequest) -> ApiResult<Created>;

    /// Resolve a login by exact email match against the user list
    async fn find_user_by_email(&self, email: &str) -> ApiResult<User> {
        self.list_users()
            .await?
            .into_iter()
            .find(|user| user.email == email)
            .ok_or(ApiError::UserNotFound)
    }
}
