use serde::{Deserialize, Serialize};

/// Sentinel tag meaning "no constraint" for bedrooms, bathrooms and furnishing
pub const ANY: &str = "any";
/// Sentinel tag meaning "no constraint" for property type and status
pub const ALL: &str = "all";

pub const DEFAULT_MIN_PRICE: i64 = 0;
pub const DEFAULT_MAX_PRICE: i64 = 10_000;

pub const PROPERTY_TYPE_OPTIONS: &[&str] = &[ALL, "apartment", "house", "studio", "condo", "townhouse"];
pub const BEDROOM_OPTIONS: &[&str] = &[ANY, "1", "2", "3", "4+"];
pub const BATHROOM_OPTIONS: &[&str] = &[ANY, "1", "2", "3+"];
pub const FURNISHING_OPTIONS: &[&str] = &[ANY, "furnished", "semi-furnished", "unfurnished"];
pub const STATUS_OPTIONS: &[&str] = &[ALL, "available", "rented", "pending"];
pub const PRICE_STEPS: &[i64] = &[0, 500, 1_000, 1_500, 2_000, 3_000, 5_000, 7_500, 10_000];

/// Canonical set of listing search constraints.
///
/// `price_range` is `[min, max]`; nothing enforces `min <= max`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub keyword: String,
    pub property_type: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub price_range: [i64; 2],
    pub furnishing: String,
    pub city: String,
    pub status: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            property_type: ALL.to_string(),
            bedrooms: ANY.to_string(),
            bathrooms: ANY.to_string(),
            price_range: [DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE],
            furnishing: ANY.to_string(),
            city: String::new(),
            status: ALL.to_string(),
        }
    }
}

impl FilterState {
    /// True when any field differs from its default.
    ///
    /// Decides between an unfiltered listing fetch and a filtered search.
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn min_price(&self) -> i64 {
        self.price_range[0]
    }

    pub fn max_price(&self) -> i64 {
        self.price_range[1]
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits.
///
/// Trailing garbage is ignored ("1500abc" is 1500). Returns `None` when no
/// digit leads the input.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }

    // Saturate rather than fail on absurdly long inputs
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
