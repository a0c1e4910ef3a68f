use super::Outcome;
use crate::api::HomeFinderApi;
use crate::forms::{PropertyField, PropertyForm};
use crate::models::PropertyType;
use crate::notice::Notice;
use crate::router::Route;
use crate::session::Session;
use std::fmt;
use tracing::{error, info, warn};

/// New listing form
#[derive(Debug, Default)]
pub struct CreatePropertyPage {
    pub form: PropertyForm,
    property_types: Vec<PropertyType>,
}

impl CreatePropertyPage {
    /// Load the type options; on failure the selector just stays empty
    pub async fn mount(api: &dyn HomeFinderApi) -> Self {
        let property_types = match api.list_property_types().await {
            Ok(types) => types,
            Err(e) => {
                error!("Error fetching property types: {}", e);
                Vec::new()
            }
        };

        Self {
            form: PropertyForm::default(),
            property_types,
        }
    }

    pub fn property_types(&self) -> &[PropertyType] {
        &self.property_types
    }

    pub fn set(&mut self, field: PropertyField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub async fn submit(&self, api: &dyn HomeFinderApi, session: &Session) -> Outcome {
        let payload = self.form.to_payload(session.user_id());

        match api.create_property(&payload).await {
            Ok(created) => {
                info!("Created property {:?}", created.property_id);
                Outcome::navigate(Route::MyProperties)
            }
            Err(e) => {
                warn!("Error creating property: {}", e);
                Outcome::notice(Notice::alert("Error creating property"))
            }
        }
    }
}

impl fmt::Display for CreatePropertyPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Create New Property Listing")?;
        if self.property_types.is_empty() {
            writeln!(f, "  No property types available.")?;
        } else {
            let names: Vec<String> = self
                .property_types
                .iter()
                .map(|t| format!("{}={}", t.type_id, t.type_name))
                .collect();
            writeln!(f, "  Property Types: {}", names.join(", "))?;
        }
        write!(f, "{}", FormView(&self.form))
    }
}

/// Field-by-field listing of a property form
pub(crate) struct FormView<'a>(pub &'a PropertyForm);

impl fmt::Display for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.0;
        writeln!(f, "  Title:       {}", form.title)?;
        writeln!(f, "  Type:        {}", form.type_id)?;
        writeln!(f, "  Price:       ${}", form.price)?;
        writeln!(f, "  Location:    {}", form.location)?;
        writeln!(f, "  Bedrooms:    {}", form.num_bedrooms)?;
        writeln!(f, "  Bathrooms:   {}", form.num_bathrooms)?;
        writeln!(f, "  Garage:      {}", form.num_garage)?;
        writeln!(f, "  Description: {}", form.description)?;
        write!(f, "  Image URL:   {}", form.image_url)
    }
}
