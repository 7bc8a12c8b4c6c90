//! Conversion between `FilterState` and URL query parameters

use super::state::{parse_leading_int, FilterState, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};

pub const KEYWORD: &str = "keyword";
pub const PROPERTY_TYPE: &str = "property_type";
pub const BEDROOMS: &str = "bedrooms";
pub const BATHROOMS: &str = "bathrooms";
pub const MIN_PRICE: &str = "min_price";
pub const MAX_PRICE: &str = "max_price";
pub const FURNISHING: &str = "furnishing";
pub const CITY: &str = "city";
pub const STATUS: &str = "status";

/// Every query key the listing page understands
pub const RECOGNIZED_KEYS: &[&str] = &[
    KEYWORD,
    PROPERTY_TYPE,
    BEDROOMS,
    BATHROOMS,
    MIN_PRICE,
    MAX_PRICE,
    FURNISHING,
    CITY,
    STATUS,
];

/// First non-empty value for `key`
fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}

fn push_if_changed<T>(pairs: &mut Vec<(String, String)>, key: &str, value: &T, default: &T)
where
    T: PartialEq + ToString + ?Sized,
{
    if value != default {
        pairs.push((key.to_string(), value.to_string()));
    }
}

impl FilterState {
    /// Build a complete filter state from query parameters.
    ///
    /// Missing keys and unparseable prices take their defaults. Unknown keys
    /// are ignored.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        let defaults = FilterState::default();
        let text = |key: &str, fallback: String| {
            lookup(pairs, key).map(str::to_string).unwrap_or(fallback)
        };
        let price = |key: &str, fallback: i64| {
            lookup(pairs, key).and_then(parse_leading_int).unwrap_or(fallback)
        };

        FilterState {
            keyword: text(KEYWORD, defaults.keyword),
            property_type: text(PROPERTY_TYPE, defaults.property_type),
            bedrooms: text(BEDROOMS, defaults.bedrooms),
            bathrooms: text(BATHROOMS, defaults.bathrooms),
            price_range: [price(MIN_PRICE, DEFAULT_MIN_PRICE), price(MAX_PRICE, DEFAULT_MAX_PRICE)],
            furnishing: text(FURNISHING, defaults.furnishing),
            city: text(CITY, defaults.city),
            status: text(STATUS, defaults.status),
        }
    }

    /// Query parameters for every field that differs from its default
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let defaults = FilterState::default();
        let mut pairs = Vec::new();

        push_if_changed(&mut pairs, KEYWORD, &self.keyword, &defaults.keyword);
        push_if_changed(&mut pairs, PROPERTY_TYPE, &self.property_type, &defaults.property_type);
        push_if_changed(&mut pairs, BEDROOMS, &self.bedrooms, &defaults.bedrooms);
        push_if_changed(&mut pairs, BATHROOMS, &self.bathrooms, &defaults.bathrooms);
        push_if_changed(&mut pairs, MIN_PRICE, &self.min_price(), &DEFAULT_MIN_PRICE);
        push_if_changed(&mut pairs, MAX_PRICE, &self.max_price(), &DEFAULT_MAX_PRICE);
        push_if_changed(&mut pairs, FURNISHING, &self.furnishing, &defaults.furnishing);
        push_if_changed(&mut pairs, CITY, &self.city, &defaults.city);
        push_if_changed(&mut pairs, STATUS, &self.status, &defaults.status);

        pairs
    }
}
