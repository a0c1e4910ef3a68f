use crate::api::{ApiResult, HomeFinderApi, PropertyFilters};
use crate::components::PropertyCard;
use crate::models::Property;
use crate::notice::Notice;
use crate::session::Session;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, error};

/// Listings the current user has saved
#[derive(Debug, Default)]
pub struct MyFavoritesPage {
    logged_in: bool,
    favorites: Vec<Property>,
    error: Option<Notice>,
}

impl MyFavoritesPage {
    pub async fn mount(api: &dyn HomeFinderApi, session: &Session) -> Self {
        let Some(user_id) = session.user_id() else {
            return Self::default();
        };

        let mut page = Self {
            logged_in: true,
            ..Default::default()
        };

        match Self::load(api, user_id).await {
            Ok(favorites) => page.favorites = favorites,
            Err(e) => {
                error!("Error loading favorites: {}", e);
                page.error = Some(Notice::error(
                    "Failed to load favorites. Please try again later.",
                ));
            }
        }
        page
    }

    pub fn favorites(&self) -> &[Property] {
        &self.favorites
    }

    pub fn error(&self) -> Option<&Notice> {
        self.error.as_ref()
    }

    async fn load(api: &dyn HomeFinderApi, user_id: i64) -> ApiResult<Vec<Property>> {
        let ids: HashSet<i64> = api
            .list_favorites(user_id)
            .await?
            .into_iter()
            .map(|fav| fav.property_id)
            .collect();

        let properties = api.list_properties(&PropertyFilters::default()).await?;
        let favorites: Vec<Property> = properties
            .into_iter()
            .filter(|p| ids.contains(&p.property_id))
            .collect();

        debug!("Filtered {} favorite properties", favorites.len());
        Ok(favorites)
    }
}

impl fmt::Display for MyFavoritesPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.logged_in {
            return write!(f, "{}", Notice::info("Please log in to view your favorites"));
        }

        writeln!(f, "My Favorites ({})", self.favorites.len())?;
        if let Some(error) = &self.error {
            writeln!(f, "{error}")?;
        }

        if self.favorites.is_empty() {
            write!(
                f,
                "{}",
                Notice::info("You haven't added any properties to your favorites yet.")
            )?;
        } else {
            for property in &self.favorites {
                writeln!(f, "{}", PropertyCard::new(property).with_favorite(true))?;
            }
        }
        Ok(())
    }
}
