use crate::router::Route;
use crate::session::Session;
use std::fmt;

/// A link in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Link(&'static str, Route),
    Logout,
}

/// Top bar; which links show depends on whether someone is logged in
pub struct Navbar {
    items: Vec<NavItem>,
    user_name: Option<String>,
}

impl Navbar {
    pub fn new(session: &Session) -> Self {
        let items = if session.is_logged_in() {
            vec![
                NavItem::Link("Create Listing", Route::CreateProperty),
                NavItem::Link("My Properties", Route::MyProperties),
                NavItem::Link("Favorites", Route::MyFavorites),
                NavItem::Logout,
            ]
        } else {
            vec![
                NavItem::Link("Login", Route::Login),
                NavItem::Link("Register", Route::Register),
            ]
        };

        Self {
            items,
            user_name: session.current_user().map(|user| user.name.clone()),
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn shows(&self, route: Route) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, NavItem::Link(_, r) if *r == route))
    }
}

impl fmt::Display for Navbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🏠 HomeFinder ({})", Route::Home)?;
        for item in &self.items {
            match item {
                NavItem::Link(label, route) => write!(f, " | {label} ({route})")?,
                NavItem::Logout => write!(f, " | Logout")?,
            }
        }
        if let Some(name) = &self.user_name {
            write!(f, " | signed in as {name}")?;
        }
        Ok(())
    }
}
