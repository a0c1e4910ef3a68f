//! One controller per route.
//!
//! Each page fetches what it needs when mounted and exposes its form
//! actions as async methods. Actions report what should happen next as an
//! [`Outcome`]: a notice to show and/or a route to navigate to.

pub mod create_property;
pub mod edit_property;
pub mod home;
pub mod login;
pub mod my_favorites;
pub mod my_properties;
pub mod property_details;
pub mod register;

pub use create_property::CreatePropertyPage;
pub use edit_property::EditPropertyPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use my_favorites::MyFavoritesPage;
pub use my_properties::MyPropertiesPage;
pub use property_details::PropertyDetailsPage;
pub use register::RegisterPage;

use crate::api::HomeFinderApi;
use crate::notice::Notice;
use crate::router::Route;
use crate::session::Session;
use anyhow::Result;

/// Result of a page action
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub navigate: Option<Route>,
    pub notice: Option<Notice>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn navigate(route: Route) -> Self {
        Self {
            navigate: Some(route),
            notice: None,
        }
    }

    pub fn notice(notice: Notice) -> Self {
        Self {
            navigate: None,
            notice: Some(notice),
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

/// Yes/no question asked before destructive actions
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Look up `email` and make that user the current one
pub(crate) async fn log_in(
    api: &dyn HomeFinderApi,
    session: &mut Session,
    email: &str,
) -> Result<()> {
    let user = api.find_user_by_email(email).await?;
    session.login(user).await
}
