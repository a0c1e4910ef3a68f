pub mod card;
pub mod filters;
pub mod footer;
pub mod navbar;

pub use card::{format_price, PropertyCard};
pub use filters::{FilterField, FilterPanel};
pub use footer::Footer;
pub use navbar::{NavItem, Navbar};
