use super::{Confirm, Outcome};
use crate::api::{HomeFinderApi, PropertyFilters};
use crate::components::PropertyCard;
use crate::models::Property;
use crate::notice::Notice;
use crate::router::Route;
use crate::session::Session;
use std::fmt;
use tracing::{info, warn};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this property?";

/// Listings owned by the current user
#[derive(Debug, Default)]
pub struct MyPropertiesPage {
    properties: Vec<Property>,
    notice: Option<Notice>,
}

impl MyPropertiesPage {
    pub async fn mount(api: &dyn HomeFinderApi, session: &Session) -> Self {
        let mut page = Self::default();
        page.load(api, session).await;
        page
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn edit(&self, property_id: i64) -> Outcome {
        Outcome::navigate(Route::EditProperty(property_id))
    }

    /// Delete after confirmation, then reload the list
    pub async fn delete(
        &mut self,
        api: &dyn HomeFinderApi,
        session: &Session,
        property_id: i64,
        confirm: &dyn Confirm,
    ) -> Outcome {
        if !confirm.confirm(DELETE_PROMPT) {
            return Outcome::none();
        }

        match api.delete_property(property_id).await {
            Ok(()) => {
                info!("Deleted property {}", property_id);
                self.load(api, session).await;
                Outcome::none()
            }
            Err(e) => {
                warn!("Error deleting property {}: {}", property_id, e);
                Outcome::notice(Notice::alert("Error deleting property"))
            }
        }
    }

    async fn load(&mut self, api: &dyn HomeFinderApi, session: &Session) {
        let Some(user_id) = session.user_id() else {
            self.properties.clear();
            self.notice = Some(Notice::info("Please log in to manage your listings"));
            return;
        };

        match api.list_properties(&PropertyFilters::default()).await {
            Ok(all) => {
                self.properties = all
                    .into_iter()
                    .filter(|p| p.user_id == Some(user_id))
                    .collect();
            }
            // The list is left as it was
            Err(e) => warn!("Error loading properties: {}", e),
        }
    }
}

impl fmt::Display for MyPropertiesPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "My Properties")?;
        if let Some(notice) = &self.notice {
            writeln!(f, "{notice}")?;
        }
        for property in &self.properties {
            writeln!(f, "{}", PropertyCard::new(property).for_owner())?;
        }
        Ok(())
    }
}
