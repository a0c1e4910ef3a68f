use super::Outcome;
use crate::api::HomeFinderApi;
use crate::components::{FilterField, FilterPanel, PropertyCard};
use crate::models::{Favorite, Property};
use crate::notice::Notice;
use crate::session::Session;
use std::fmt;
use tracing::{debug, error, info, warn};

/// Listing grid with filters and favorite toggles
#[derive(Debug, Default)]
pub struct HomePage {
    properties: Vec<Property>,
    favorites: Vec<Favorite>,
    filters: FilterPanel,
    notice: Option<Notice>,
}

impl HomePage {
    pub async fn mount(api: &dyn HomeFinderApi, session: &Session) -> Self {
        Self::mount_with(api, session, FilterPanel::default()).await
    }

    /// Mount with filter inputs already filled in
    pub async fn mount_with(
        api: &dyn HomeFinderApi,
        session: &Session,
        filters: FilterPanel,
    ) -> Self {
        let mut page = Self {
            filters,
            ..Default::default()
        };

        match api.list_property_types().await {
            Ok(types) => page.filters.set_property_types(types),
            Err(e) => error!("Error loading property types: {}", e),
        }

        page.reload(api, session).await;
        page
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn filters(&self) -> &FilterPanel {
        &self.filters
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_favorite(&self, property_id: i64) -> bool {
        self.favorites.iter().any(|fav| fav.property_id == property_id)
    }

    pub async fn set_filter(
        &mut self,
        api: &dyn HomeFinderApi,
        session: &Session,
        field: FilterField,
        value: impl Into<String>,
    ) {
        self.filters.set(field, value);
        self.reload(api, session).await;
    }

    pub async fn clear_filters(&mut self, api: &dyn HomeFinderApi, session: &Session) {
        self.filters.clear();
        self.reload(api, session).await;
    }

    /// Save a listing to the user's favorites.
    ///
    /// Nothing is sent when nobody is logged in. After a successful add the
    /// whole favorites list is fetched again.
    pub async fn toggle_favorite(
        &mut self,
        api: &dyn HomeFinderApi,
        session: &Session,
        property_id: i64,
    ) -> Outcome {
        let Some(user_id) = session.user_id() else {
            return self.show(Notice::warning("Please login to add favorites"));
        };

        debug!("Adding favorite: user_id={}, property_id={}", user_id, property_id);
        match api.add_favorite(user_id, property_id).await {
            Ok(_) => {
                self.load_favorites(api, session).await;
                info!("Property {} added to favorites", property_id);
                self.show(Notice::success("Property added to favorites"))
            }
            Err(e) => {
                warn!("Error adding favorite: {}", e);
                let message = e.server_message().unwrap_or("Error adding to favorites");
                self.show(Notice::error(message))
            }
        }
    }

    async fn reload(&mut self, api: &dyn HomeFinderApi, session: &Session) {
        self.load_properties(api).await;
        self.load_favorites(api, session).await;
    }

    async fn load_properties(&mut self, api: &dyn HomeFinderApi) {
        match api.list_properties(&self.filters.filters()).await {
            Ok(properties) => {
                debug!("Loaded {} properties", properties.len());
                self.properties = properties;
            }
            Err(e) => {
                error!("Error loading properties: {}", e);
                self.show(Notice::error("Error loading properties"));
            }
        }
    }

    async fn load_favorites(&mut self, api: &dyn HomeFinderApi, session: &Session) {
        let Some(user_id) = session.user_id() else {
            return;
        };

        match api.list_favorites(user_id).await {
            Ok(favorites) => self.favorites = favorites,
            Err(e) => {
                error!("Error loading favorites: {}", e);
                self.show(Notice::error("Error loading favorites"));
            }
        }
    }

    fn show(&mut self, notice: Notice) -> Outcome {
        self.notice = Some(notice.clone());
        Outcome::notice(notice)
    }
}

impl fmt::Display for HomePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Find Your Dream Home")?;
        writeln!(
            f,
            "Discover the perfect property from our extensive collection of homes"
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.filters)?;
        writeln!(f)?;
        writeln!(f, "Featured Properties ({})", self.properties.len())?;

        for property in &self.properties {
            let card = PropertyCard::new(property).with_favorite(self.is_favorite(property.property_id));
            writeln!(f, "{card}")?;
        }

        if let Some(notice) = &self.notice {
            write!(f, "{notice}")?;
        }
        Ok(())
    }
}
