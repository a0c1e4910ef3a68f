use crate::api::PropertyFilters;
use crate::forms::{parse_float, parse_int};
use crate::models::PropertyType;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Inputs of the filter panel, named after their query keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    TypeId,
    MinBeds,
    MaxBeds,
    MinBaths,
    MaxBaths,
    MinGarage,
    MaxGarage,
    MinPrice,
    MaxPrice,
}

impl FilterField {
    pub const ALL: [FilterField; 9] = [
        FilterField::TypeId,
        FilterField::MinBeds,
        FilterField::MaxBeds,
        FilterField::MinBaths,
        FilterField::MaxBaths,
        FilterField::MinGarage,
        FilterField::MaxGarage,
        FilterField::MinPrice,
        FilterField::MaxPrice,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FilterField::TypeId => "type_id",
            FilterField::MinBeds => "min_beds",
            FilterField::MaxBeds => "max_beds",
            FilterField::MinBaths => "min_baths",
            FilterField::MaxBaths => "max_baths",
            FilterField::MinGarage => "min_garage",
            FilterField::MaxGarage => "max_garage",
            FilterField::MinPrice => "min_price",
            FilterField::MaxPrice => "max_price",
        }
    }
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        FilterField::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| format!("unknown filter: {key}"))
    }
}

/// Filter panel state; every input is kept as typed text
#[derive(Debug, Clone, Default)]
pub struct FilterPanel {
    values: [String; 9],
    property_types: Vec<PropertyType>,
}

impl FilterPanel {
    pub fn set_property_types(&mut self, types: Vec<PropertyType>) {
        self.property_types = types;
    }

    pub fn property_types(&self) -> &[PropertyType] {
        &self.property_types
    }

    pub fn value(&self, field: FilterField) -> &str {
        &self.values[field as usize]
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        self.values[field as usize] = value.into();
    }

    pub fn clear(&mut self) {
        self.values = Default::default();
    }

    /// Typed filters; blank or unparsable inputs are left out of the query
    pub fn filters(&self) -> PropertyFilters {
        let int = |field: FilterField| {
            let raw = self.value(field).trim();
            let parsed = (!raw.is_empty()).then(|| parse_int(raw)).flatten();
            if parsed.is_none() && !raw.is_empty() {
                debug!("Ignoring non-numeric {} filter: {:?}", field.key(), raw);
            }
            parsed
        };
        let float = |field: FilterField| {
            let raw = self.value(field).trim();
            (!raw.is_empty()).then(|| parse_float(raw)).flatten()
        };

        PropertyFilters {
            type_id: int(FilterField::TypeId),
            min_beds: int(FilterField::MinBeds),
            max_beds: int(FilterField::MaxBeds),
            min_baths: int(FilterField::MinBaths),
            max_baths: int(FilterField::MaxBaths),
            min_garage: int(FilterField::MinGarage),
            max_garage: int(FilterField::MaxGarage),
            min_price: float(FilterField::MinPrice),
            max_price: float(FilterField::MaxPrice),
        }
    }
}

impl fmt::Display for FilterPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Filters")?;

        let selected = parse_int(self.value(FilterField::TypeId));
        let type_label = self
            .property_types
            .iter()
            .find(|t| Some(t.type_id) == selected)
            .map_or("All Types", |t| t.type_name.as_str());
        writeln!(f, "  Property Type: {type_label}")?;

        let range = |min: FilterField, max: FilterField| {
            let bound = |field: FilterField| match self.value(field) {
                "" => "any".to_string(),
                value => value.to_string(),
            };
            format!("{} – {}", bound(min), bound(max))
        };
        writeln!(f, "  Beds:   {}", range(FilterField::MinBeds, FilterField::MaxBeds))?;
        writeln!(f, "  Baths:  {}", range(FilterField::MinBaths, FilterField::MaxBaths))?;
        writeln!(f, "  Garage: {}", range(FilterField::MinGarage, FilterField::MaxGarage))?;
        write!(f, "  Price:  {}", range(FilterField::MinPrice, FilterField::MaxPrice))
    }
}
