use super::{log_in, Outcome};
use crate::api::HomeFinderApi;
use crate::notice::Notice;
use crate::router::Route;
use crate::session::Session;
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct LoginPage {
    pub email: String,
}

impl LoginPage {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Log in by email; there is no password
    pub async fn submit(&self, api: &dyn HomeFinderApi, session: &mut Session) -> Outcome {
        match log_in(api, session, &self.email).await {
            Ok(()) => {
                info!("Login succeeded for {}", self.email);
                Outcome::navigate(Route::Home)
            }
            Err(e) => {
                warn!("Login failed for {}: {}", self.email, e);
                Outcome::notice(Notice::alert("User not found. Please register first."))
            }
        }
    }
}

impl fmt::Display for LoginPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Login")?;
        write!(f, "  Email: {}", self.email)
    }
}
