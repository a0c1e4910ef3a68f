use super::create_property::FormView;
use super::Outcome;
use crate::api::HomeFinderApi;
use crate::forms::{PropertyField, PropertyForm};
use crate::notice::Notice;
use crate::router::Route;
use std::fmt;
use tracing::{info, warn};

/// Edit form for an existing listing
#[derive(Debug)]
pub struct EditPropertyPage {
    id: i64,
    owner_id: Option<i64>,
    pub form: PropertyForm,
}

impl EditPropertyPage {
    /// Fetch the listing and prefill the form.
    ///
    /// When it cannot be loaded the caller gets the alert and the route back
    /// to the owner's listings instead of a page.
    pub async fn mount(api: &dyn HomeFinderApi, id: i64) -> Result<Self, Outcome> {
        match api.get_property(id).await {
            Ok(property) => Ok(Self {
                id,
                owner_id: property.user_id,
                form: PropertyForm::from_property(&property),
            }),
            Err(e) => {
                warn!("Error loading property {}: {}", id, e);
                Err(Outcome::navigate(Route::MyProperties)
                    .with_notice(Notice::alert("Error loading property")))
            }
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn set(&mut self, field: PropertyField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub async fn submit(&self, api: &dyn HomeFinderApi) -> Outcome {
        let payload = self.form.to_payload(self.owner_id);

        match api.update_property(self.id, &payload).await {
            Ok(()) => {
                info!("Updated property {}", self.id);
                Outcome::navigate(Route::MyProperties)
            }
            Err(e) => {
                warn!("Error updating property {}: {}", self.id, e);
                Outcome::notice(Notice::alert("Error updating property"))
            }
        }
    }
}

impl fmt::Display for EditPropertyPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Edit Property #{}", self.id)?;
        write!(f, "{}", FormView(&self.form))
    }
}
