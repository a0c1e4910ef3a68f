use crate::models::Property;
use crate::router::Route;
use std::fmt;

/// Price with thousands separators, e.g. `$1,250,000` or `$1,234.5`
pub fn format_price(price: f64) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    let rounded = (price.abs() * 1000.0).round() / 1000.0;
    let whole = rounded.trunc() as u64;
    let fraction = format!("{:.3}", rounded.fract());
    let fraction = fraction
        .trim_start_matches('0')
        .trim_end_matches('0')
        .trim_end_matches('.');

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}${grouped}{fraction}")
}

/// Summary of one listing in a grid
pub struct PropertyCard<'a> {
    property: &'a Property,
    favorite: Option<bool>,
    owner: bool,
}

impl<'a> PropertyCard<'a> {
    pub fn new(property: &'a Property) -> Self {
        Self {
            property,
            favorite: None,
            owner: false,
        }
    }

    /// Show the favorite toggle in the given state
    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.favorite = Some(is_favorite);
        self
    }

    /// Show edit/delete actions
    pub fn for_owner(mut self) -> Self {
        self.owner = true;
        self
    }
}

impl fmt::Display for PropertyCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.property;
        let heart = match self.favorite {
            Some(true) => "♥ ",
            Some(false) => "♡ ",
            None => "",
        };

        writeln!(f, "{}#{} {}  {}", heart, p.property_id, p.title, format_price(p.price))?;
        match &p.type_name {
            Some(type_name) => writeln!(f, "   {} · {}", type_name, p.location)?,
            None => writeln!(f, "   {}", p.location)?,
        }
        writeln!(
            f,
            "   {} Beds · {} Baths · {} Garage",
            p.num_bedrooms, p.num_bathrooms, p.num_garage
        )?;
        write!(f, "   {}", Route::PropertyDetails(p.property_id))?;
        if self.owner {
            write!(
                f,
                "\n   Edit: {} · Delete: homefinder my-properties --delete {}",
                Route::EditProperty(p.property_id),
                p.property_id
            )?;
        }
        Ok(())
    }
}
