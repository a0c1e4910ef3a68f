//! Terminal front end for the HomeFinder real-estate listing service.
//!
//! Everything persistent lives behind the REST API; this crate holds the
//! typed client, the session, one controller per page and the shared
//! display components.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod models;
pub mod notice;
pub mod pages;
pub mod router;
pub mod session;

pub use api::{ApiClient, ApiError, HomeFinderApi, PropertyFilters};
pub use app::App;
pub use config::Config;
pub use router::Route;
pub use session::{LocalStorage, Session};
