use crate::api::HomeFinderApi;
use crate::components::{Footer, Navbar};
use crate::pages::{
    Confirm, CreatePropertyPage, EditPropertyPage, HomePage, LoginPage, MyFavoritesPage,
    MyPropertiesPage, Outcome, PropertyDetailsPage, RegisterPage,
};
use crate::router::Route;
use crate::session::Session;
use anyhow::Result;
use tracing::{debug, info};

/// Owns the backend handle and the session, and renders routes
pub struct App<A> {
    api: A,
    session: Session,
    confirm: Box<dyn Confirm>,
}

impl<A: HomeFinderApi> App<A> {
    pub fn new(api: A, session: Session, confirm: Box<dyn Confirm>) -> Self {
        Self {
            api,
            session,
            confirm,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn confirm(&self) -> &dyn Confirm {
        self.confirm.as_ref()
    }

    /// Split borrow for actions that need the backend and a mutable session
    pub fn parts(&mut self) -> (&A, &mut Session) {
        (&self.api, &mut self.session)
    }

    /// Mount the page behind `route` and render it inside the navbar/footer
    pub async fn visit(&self, route: Route) -> String {
        info!("Visiting {}", route);
        let body = self.body(route).await;
        format!("{}\n\n{}\n\n{}", Navbar::new(&self.session), body, Footer)
    }

    /// Show an action's notice, then the page it navigates to
    pub async fn follow(&self, outcome: Outcome) -> String {
        let mut out = String::new();
        if let Some(notice) = &outcome.notice {
            out.push_str(&notice.to_string());
        }
        if let Some(route) = outcome.navigate {
            debug!("Navigating to {}", route);
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(&self.visit(route).await);
        }
        out
    }

    /// Navbar logout: forget the user and go to the login page
    pub async fn logout(&mut self) -> Result<Outcome> {
        self.session.logout().await?;
        Ok(Outcome::navigate(Route::Login))
    }

    async fn body(&self, route: Route) -> String {
        let api: &dyn HomeFinderApi = &self.api;

        match route {
            Route::Home => HomePage::mount(api, &self.session).await.to_string(),
            Route::Login => LoginPage::default().to_string(),
            Route::Register => RegisterPage::default().to_string(),
            Route::PropertyDetails(id) => PropertyDetailsPage::mount(api, id).await.to_string(),
            Route::MyProperties => MyPropertiesPage::mount(api, &self.session)
                .await
                .to_string(),
            Route::MyFavorites => MyFavoritesPage::mount(api, &self.session)
                .await
                .to_string(),
            Route::CreateProperty => CreatePropertyPage::mount(api).await.to_string(),
            Route::EditProperty(id) => match EditPropertyPage::mount(api, id).await {
                Ok(page) => page.to_string(),
                Err(outcome) => {
                    let notice = outcome.notice.map(|n| n.to_string()).unwrap_or_default();
                    let fallback = MyPropertiesPage::mount(api, &self.session).await;
                    format!("{notice}\n\n{fallback}")
                }
            },
        }
    }
}
