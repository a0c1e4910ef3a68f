pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use traits::HomeFinderApi;
pub use types::PropertyFilters;
