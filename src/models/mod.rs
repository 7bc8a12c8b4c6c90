use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Location information for a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    pub area: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Core rental listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub address: String,
    pub location: Location,
    /// Monthly rent in whole currency units
    pub price: i64,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub property_type: String,
    pub furnishing: String,
    pub status: String,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub listed_at: DateTime<Utc>,
}

/// Slide shown in the home page hero carousel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverImage {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub subtitle: Option<String>,
}

/// Page metadata published alongside a property result set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn first_page(total: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        Self {
            page: 1,
            per_page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }
}
