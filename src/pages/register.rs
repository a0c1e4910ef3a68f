use super::{log_in, Outcome};
use crate::api::HomeFinderApi;
use crate::models::NewUser;
use crate::notice::Notice;
use crate::router::Route;
use crate::session::Session;
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct RegisterPage {
    pub name: String,
    pub email: String,
}

impl RegisterPage {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Create the account, then log straight in with the same email
    pub async fn submit(&self, api: &dyn HomeFinderApi, session: &mut Session) -> Outcome {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Outcome::notice(Notice::warning("Name and email are required"));
        }

        let user = NewUser {
            name: self.name.clone(),
            email: self.email.clone(),
        };

        let result: anyhow::Result<()> = async {
            api.register(&user).await?;
            log_in(api, session, &user.email).await
        }
        .await;

        match result {
            Ok(()) => {
                info!("Registered {}", user.email);
                Outcome::navigate(Route::Home)
            }
            Err(e) => {
                warn!("Registration failed for {}: {}", user.email, e);
                Outcome::notice(Notice::alert("Registration failed. Please try again."))
            }
        }
    }
}

impl fmt::Display for RegisterPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Register")?;
        writeln!(f, "  Name:  {}", self.name)?;
        write!(f, "  Email: {}", self.email)
    }
}
