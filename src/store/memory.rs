use crate::filters::{FilterState, ALL, ANY};
use crate::models::{CoverImage, Pagination, Property};
use crate::store::sample;
use crate::store::traits::PropertyStore;
use crate::store::types::StoreState;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Reference store over a fixed catalogue held in memory
pub struct InMemoryStore {
    catalogue: Vec<Property>,
    covers: Vec<CoverImage>,
    page_size: usize,
    latency: Duration,
    pending_failure: Mutex<Option<String>>,
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn new(catalogue: Vec<Property>, covers: Vec<CoverImage>, page_size: usize) -> Self {
        Self {
            catalogue,
            covers,
            page_size: page_size.max(1),
            latency: Duration::ZERO,
            pending_failure: Mutex::new(None),
            state: Mutex::new(StoreState::default()),
        }
    }

    /// Store seeded with the bundled demo listings
    pub fn with_sample_data(page_size: usize) -> Self {
        Self::new(sample::properties(), sample::cover_images(), page_size)
    }

    /// Delay every call by `latency` before publishing its result
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make the next property or cover call fail with `message`
    pub fn fail_next(&self, message: impl Into<String>) {
        *lock(&self.pending_failure) = Some(message.into());
    }

    fn take_failure(&self) -> Option<String> {
        lock(&self.pending_failure).take()
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        lock(&self.state)
    }

    async fn load_properties(&self, filters: Option<&FilterState>) -> Result<()> {
        self.begin_properties_load();

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if let Some(message) = self.take_failure() {
            warn!("Property load failed: {}", message);
            let mut state = self.state();
            state.properties_loading = false;
            state.properties_error = Some(message.clone());
            anyhow::bail!(message);
        }

        let mut matched: Vec<Property> = self
            .catalogue
            .iter()
            .filter(|p| filters.map_or(true, |f| matches(p, f)))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.listed_at.cmp(&a.listed_at));

        let pagination = Pagination::first_page(matched.len(), self.page_size);
        matched.truncate(self.page_size);
        debug!(
            "Matched {} of {} properties (showing {})",
            pagination.total,
            self.catalogue.len(),
            matched.len()
        );

        let mut state = self.state();
        state.properties = matched;
        state.properties_pagination = Some(pagination);
        state.properties_loading = false;
        Ok(())
    }
}

#[async_trait]
impl PropertyStore for InMemoryStore {
    fn begin_properties_load(&self) {
        let mut state = self.state();
        state.properties_loading = true;
        state.properties_error = None;
    }

    fn begin_cover_images_load(&self) {
        let mut state = self.state();
        state.cover_images_loading = true;
        state.cover_images_error = None;
    }

    async fn fetch_properties(&self) -> Result<()> {
        info!("Fetching all properties");
        self.load_properties(None).await
    }

    async fn search_properties(&self, filters: &FilterState) -> Result<()> {
        info!("Searching properties with {:?}", filters);
        self.load_properties(Some(filters)).await
    }

    async fn fetch_cover_images(&self) -> Result<()> {
        self.begin_cover_images_load();

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut state = self.state();
        state.cover_images_loading = false;
        if let Some(message) = self.take_failure() {
            warn!("Cover image load failed: {}", message);
            state.cover_images_error = Some(message.clone());
            anyhow::bail!(message);
        }
        state.cover_images = self.covers.clone();
        Ok(())
    }

    fn clear_properties_error(&self) {
        self.state().properties_error = None;
    }

    fn clear_cover_images_error(&self) {
        self.state().cover_images_error = None;
    }

    fn snapshot(&self) -> StoreState {
        self.state().clone()
    }

    fn store_name(&self) -> &'static str {
        "in-memory"
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Whether `property` satisfies every constraint in `filters`
pub fn matches(property: &Property, filters: &FilterState) -> bool {
    let keyword = filters.keyword.trim().to_lowercase();
    if !keyword.is_empty() {
        let haystacks = [&property.title, &property.description, &property.address];
        if !haystacks.iter().any(|h| h.to_lowercase().contains(&keyword)) {
            return false;
        }
    }

    let city = filters.city.trim().to_lowercase();
    if !city.is_empty() && !property.location.city.to_lowercase().contains(&city) {
        return false;
    }

    tag_matches(&filters.property_type, ALL, &property.property_type)
        && tag_matches(&filters.furnishing, ANY, &property.furnishing)
        && tag_matches(&filters.status, ALL, &property.status)
        && count_matches(&filters.bedrooms, property.bedrooms)
        && count_matches(&filters.bathrooms, property.bathrooms)
        && property.price >= filters.min_price()
        && property.price <= filters.max_price()
}

fn tag_matches(wanted: &str, sentinel: &str, actual: &str) -> bool {
    wanted == sentinel || wanted.eq_ignore_ascii_case(actual)
}

/// "any", an exact count ("2"), or a lower bound ("4+")
fn count_matches(wanted: &str, actual: u8) -> bool {
    if wanted == ANY {
        return true;
    }
    match wanted.strip_suffix('+') {
        Some(min) => min.parse::<u8>().map_or(false, |min| actual >= min),
        None => wanted.parse::<u8>().map_or(false, |n| actual == n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryStore {
        InMemoryStore::with_sample_data(50)
    }

    #[tokio::test]
    async fn test_fetch_publishes_everything_newest_first() {
        let store = store();
        store.fetch_properties().await.unwrap();

        let state = store.snapshot();
        assert!(!state.properties_loading);
        assert!(state.properties_error.is_none());
        assert_eq!(state.properties.len(), sample::properties().len());
        assert!(state
            .properties
            .windows(2)
            .all(|w| w[0].listed_at >= w[1].listed_at));
    }

    #[tokio::test]
    async fn test_search_by_city_and_status() {
        let store = store();
        let filters = FilterState {
            city: "brooklyn".into(),
            status: "available".into(),
            ..FilterState::default()
        };
        store.search_properties(&filters).await.unwrap();

        let state = store.snapshot();
        assert!(!state.properties.is_empty());
        assert!(state
            .properties
            .iter()
            .all(|p| p.location.city == "Brooklyn" && p.status == "available"));
    }

    #[tokio::test]
    async fn test_inverted_price_range_matches_nothing() {
        let store = store();
        let filters = FilterState {
            price_range: [5_000, 1_000],
            ..FilterState::default()
        };
        store.search_properties(&filters).await.unwrap();
        assert!(store.snapshot().properties.is_empty());
    }

    #[tokio::test]
    async fn test_results_are_paged() {
        let store = InMemoryStore::with_sample_data(2);
        store.fetch_properties().await.unwrap();

        let state = store.snapshot();
        assert_eq!(state.properties.len(), 2);
        let pagination = state.properties_pagination.unwrap();
        assert_eq!(pagination.total, sample::properties().len());
        assert_eq!(pagination.per_page, 2);
    }

    #[tokio::test]
    async fn test_failure_is_published_and_cleared() {
        let store = store();
        store.fail_next("network down");

        assert!(store.fetch_properties().await.is_err());
        let state = store.snapshot();
        assert_eq!(state.properties_error.as_deref(), Some("network down"));
        assert!(!state.properties_loading);

        store.clear_properties_error();
        assert!(store.snapshot().properties_error.is_none());

        store.fetch_properties().await.unwrap();
        assert!(!store.snapshot().properties.is_empty());
    }

    #[tokio::test]
    async fn test_cover_images() {
        let store = store();
        store.fail_next("cdn timeout");
        assert!(store.fetch_cover_images().await.is_err());
        assert_eq!(store.snapshot().cover_images_error.as_deref(), Some("cdn timeout"));

        store.clear_cover_images_error();
        store.fetch_cover_images().await.unwrap();
        let state = store.snapshot();
        assert!(state.cover_images_error.is_none());
        assert_eq!(state.cover_images.len(), sample::cover_images().len());
    }

    #[test]
    fn test_begin_load_marks_loading_and_clears_error() {
        let store = store();
        store.state().properties_error = Some("stale".into());

        store.begin_properties_load();
        let state = store.snapshot();
        assert!(state.properties_loading);
        assert!(state.properties_error.is_none());

        store.begin_cover_images_load();
        assert!(store.snapshot().cover_images_loading);
    }

    #[test]
    fn test_count_matches() {
        assert!(count_matches("any", 0));
        assert!(count_matches("2", 2));
        assert!(!count_matches("2", 3));
        assert!(count_matches("4+", 5));
        assert!(!count_matches("4+", 3));
        assert!(!count_matches("lots", 3));
    }
}
