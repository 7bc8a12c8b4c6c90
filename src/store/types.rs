use crate::models::{CoverImage, Pagination, Property};
use serde::{Deserialize, Serialize};

/// Shared state published by a `PropertyStore`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    pub properties: Vec<Property>,
    pub properties_loading: bool,
    pub properties_error: Option<String>,
    pub properties_pagination: Option<Pagination>,
    pub cover_images: Vec<CoverImage>,
    pub cover_images_loading: bool,
    pub cover_images_error: Option<String>,
}
