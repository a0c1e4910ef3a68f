//! Text-backed form state.
//!
//! Inputs are kept as the raw strings the user typed. Numbers are coerced
//! only when a payload is built, using the same leading-prefix rules a
//! browser applies to `parseInt`/`parseFloat`, and without range checks.

use crate::models::{ContactRequest, Property, PropertyPayload};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Leading integer of `text`, ignoring whatever follows it
pub fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let digits_start = usize::from(text.starts_with(['+', '-']));
    let digits_end = text[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |offset| digits_start + offset);

    if digits_end == digits_start {
        return None;
    }
    text[..digits_end].parse().ok()
}

/// Leading decimal number of `text`, ignoring whatever follows it
pub fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = usize::from(text.starts_with(['+', '-']));
    let mut mantissa_digits = 0;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].trim_end_matches('.').parse().ok()
}

/// Editable fields of a listing form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyField {
    Title,
    Description,
    Price,
    Location,
    Bedrooms,
    Bathrooms,
    Garage,
    ImageUrl,
    TypeId,
}

/// Create/edit listing form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: String,
    pub num_bedrooms: String,
    pub num_bathrooms: String,
    pub num_garage: String,
    pub image_url: String,
    pub type_id: String,
}

impl PropertyForm {
    /// Prefill from an existing listing
    pub fn from_property(property: &Property) -> Self {
        Self {
            title: property.title.clone(),
            description: property.description.clone().unwrap_or_default(),
            price: property.price.to_string(),
            location: property.location.clone(),
            num_bedrooms: property.num_bedrooms.to_string(),
            num_bathrooms: property.num_bathrooms.to_string(),
            num_garage: property.num_garage.to_string(),
            image_url: property.image_url.clone().unwrap_or_default(),
            type_id: property.type_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: PropertyField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PropertyField::Title => self.title = value,
            PropertyField::Description => self.description = value,
            PropertyField::Price => self.price = value,
            PropertyField::Location => self.location = value,
            PropertyField::Bedrooms => self.num_bedrooms = value,
            PropertyField::Bathrooms => self.num_bathrooms = value,
            PropertyField::Garage => self.num_garage = value,
            PropertyField::ImageUrl => self.image_url = value,
            PropertyField::TypeId => self.type_id = value,
        }
    }

    /// Coerce the text fields into a request body
    pub fn to_payload(&self, user_id: Option<i64>) -> PropertyPayload {
        PropertyPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            price: parse_float(&self.price),
            location: self.location.clone(),
            num_bedrooms: parse_int(&self.num_bedrooms),
            num_bathrooms: parse_int(&self.num_bathrooms),
            num_garage: parse_int(&self.num_garage),
            image_url: self.image_url.clone(),
            user_id,
            type_id: parse_int(&self.type_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
    PropertyId,
}

pub type FormErrors = BTreeMap<ContactField, &'static str>;

/// "Request information" form on the details page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
            ContactField::PropertyId => {}
        }
    }

    pub fn validate(&self, property_id: Option<i64>) -> FormErrors {
        let mut errors = FormErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(ContactField::Email, "Email is required");
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.insert(ContactField::Email, "Email is invalid");
        }
        if self.message.trim().is_empty() {
            errors.insert(ContactField::Message, "Message is required");
        }
        if property_id.is_none() {
            errors.insert(ContactField::PropertyId, "Property ID is missing");
        }

        errors
    }

    pub fn to_request(&self, property_id: i64) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: Some(self.phone.clone()).filter(|phone| !phone.is_empty()),
            message: self.message.clone(),
            property_id,
        }
    }
}
