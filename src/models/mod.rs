use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A registered user as returned by `GET /users`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub email: String,
}

/// Registration payload for `POST /users`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Core listing record mirrored from the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub property_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub location: String,
    pub num_bedrooms: i64,
    pub num_bathrooms: i64,
    pub num_garage: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub type_id: Option<i64>,
    /// Joined from the property type table by the server
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub agent_email: Option<String>,
    #[serde(default)]
    pub agent_phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Body of `POST /properties` and `PUT /properties/:id`.
///
/// Numeric fields come from text inputs; a field that could not be coerced
/// is sent as `null` and left for the server to reject.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyPayload {
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub location: String,
    pub num_bedrooms: Option<i64>,
    pub num_bathrooms: Option<i64>,
    pub num_garage: Option<i64>,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,
}

/// Reference data used to populate type selectors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyType {
    pub type_id: i64,
    pub type_name: String,
}

/// One row of `GET /favorites/:userId`.
///
/// The server joins the full property into each row; only the id is needed
/// to compute favorite status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Favorite {
    pub property_id: i64,
    #[serde(default)]
    pub favorite_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Body of `POST /favorites`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewFavorite {
    pub user_id: i64,
    pub property_id: i64,
}

/// Visitor message about a listing, delivered to its owner or agent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub property_id: i64,
}

/// Acknowledgement returned by the create endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Created {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub property_id: Option<i64>,
}
