/// Query-string filters accepted by `GET /properties`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilters {
    pub type_id: Option<i64>,
    pub min_beds: Option<i64>,
    pub max_beds: Option<i64>,
    pub min_baths: Option<i64>,
    pub max_baths: Option<i64>,
    pub min_garage: Option<i64>,
    pub max_garage: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl PropertyFilters {
    /// Key/value pairs for the query string; unset filters are omitted
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let counts = [
            ("type_id", self.type_id),
            ("min_beds", self.min_beds),
            ("max_beds", self.max_beds),
            ("min_baths", self.min_baths),
            ("max_baths", self.max_baths),
            ("min_garage", self.min_garage),
            ("max_garage", self.max_garage),
        ];
        let prices = [("min_price", self.min_price), ("max_price", self.max_price)];

        counts
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v.to_string())))
            .chain(
                prices
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v.to_string()))),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_omits_unset_filters() {
        let filters = PropertyFilters {
            min_beds: Some(3),
            max_price: Some(250000.5),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("min_beds", "3".to_string()),
                ("max_price", "250000.5".to_string())
            ]
        );
        assert!(PropertyFilters::default().to_query().is_empty());
    }
}
