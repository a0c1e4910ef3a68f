use std::fmt;
use std::str::FromStr;

/// Every page the front end can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    PropertyDetails(i64),
    MyProperties,
    MyFavorites,
    CreateProperty,
    EditProperty(i64),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Login => write!(f, "/login"),
            Route::Register => write!(f, "/register"),
            Route::PropertyDetails(id) => write!(f, "/property/{id}"),
            Route::MyProperties => write!(f, "/my-properties"),
            Route::MyFavorites => write!(f, "/my-favorites"),
            Route::CreateProperty => write!(f, "/create-property"),
            Route::EditProperty(id) => write!(f, "/edit-property/{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No route matches {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownRoute(path.to_string());
        let rest = path.strip_prefix('/').ok_or_else(unknown)?;
        let trimmed = rest.trim_end_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        let id = |raw: &str| raw.parse::<i64>().map_err(|_| unknown());

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["login"] => Ok(Route::Login),
            ["register"] => Ok(Route::Register),
            ["property", raw] => Ok(Route::PropertyDetails(id(raw)?)),
            ["my-properties"] => Ok(Route::MyProperties),
            ["my-favorites"] => Ok(Route::MyFavorites),
            ["create-property"] => Ok(Route::CreateProperty),
            ["edit-property", raw] => Ok(Route::EditProperty(id(raw)?)),
            _ => Err(unknown()),
        }
    }
}
