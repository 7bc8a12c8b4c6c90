use crate::config::AppConfig;
use crate::filters::FilterState;
use crate::models::CoverImage;
use crate::navigation::{History, PageUrl};
use crate::pages::form::FilterForm;
use crate::store::PropertyStore;
use crate::ui::{DropdownId, DropdownSet, HeroCarousel};
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HeroView {
    Loading,
    Error { message: String },
    /// Loaded, but the store has no slides
    Empty,
    Slides { slides: Vec<CoverImage>, active: usize },
}

/// Home page: hero carousel over cover images and a search box
pub struct HomePage {
    store: Arc<dyn PropertyStore>,
    carousel: HeroCarousel,
    form: FilterForm,
    listing_path: String,
}

impl HomePage {
    pub fn mount(store: Arc<dyn PropertyStore>, config: &AppConfig) -> (Self, JoinHandle<()>) {
        info!("Mounting home page");
        let mut carousel = HeroCarousel::new(0, config.carousel_interval());
        carousel.start();

        // Only the two price pickers close each other here
        let dropdowns = DropdownSet::new()
            .with_exclusive_group(&[DropdownId::PriceMin, DropdownId::PriceMax]);

        let page = Self {
            store,
            carousel,
            form: FilterForm::new(FilterState::default(), dropdowns),
            listing_path: config.listing_path.clone(),
        };
        let handle = page.load_cover_images();
        (page, handle)
    }

    fn load_cover_images(&self) -> JoinHandle<()> {
        self.store.begin_cover_images_load();
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            if let Err(e) = store.fetch_cover_images().await {
                warn!("{} store: cover images failed: {:#}", store.store_name(), e);
            }
        })
    }

    /// Clear the stored error and fetch the slides again
    pub fn retry_cover_images(&self) -> JoinHandle<()> {
        self.store.clear_cover_images_error();
        self.load_cover_images()
    }

    /// Pick up the slide count once cover images arrive
    pub fn sync_slides(&mut self) {
        let count = self.store.snapshot().cover_images.len();
        if count != self.carousel.slide_count() {
            self.carousel.set_slide_count(count);
        }
    }

    pub fn carousel(&self) -> &HeroCarousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut HeroCarousel {
        &mut self.carousel
    }

    pub fn form(&self) -> &FilterForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FilterForm {
        &mut self.form
    }

    /// Navigate to the listing page carrying the non-default search fields
    pub fn submit(&mut self, history: &mut History) {
        let target = PageUrl::new(self.listing_path.clone(), self.form.draft().to_query_pairs());
        info!("Search submitted, navigating to {}", target);
        self.form.outside_click(None);
        history.push(target);
    }

    pub fn render_hero(&self) -> HeroView {
        let state = self.store.snapshot();
        if let Some(message) = state.cover_images_error {
            HeroView::Error { message }
        } else if state.cover_images_loading {
            HeroView::Loading
        } else if state.cover_images.is_empty() {
            HeroView::Empty
        } else {
            HeroView::Slides {
                slides: state.cover_images,
                active: self.carousel.current_index(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::recording::{Call, RecordingStore};
    use crate::store::{sample, StoreState};
    use crate::ui::PriceBound;
    use std::time::Duration;

    #[tokio::test]
    async fn test_mount_fetches_covers_once() {
        let store = Arc::new(RecordingStore::default());
        let (page, handle) = HomePage::mount(store.clone(), &AppConfig::default());
        handle.await.unwrap();
        page.render_hero();
        page.render_hero();

        assert_eq!(store.calls(), vec![Call::FetchCoverImages]);
    }

    #[tokio::test]
    async fn test_submit_pushes_listing_url() {
        let store = Arc::new(RecordingStore::default());
        let (mut page, _handle) = HomePage::mount(store, &AppConfig::default());
        let mut history = History::new(PageUrl::parse("/").unwrap());

        page.form_mut().select_option(DropdownId::Location, "Brooklyn");
        page.form_mut().edit_price(PriceBound::Max, "3000");
        page.submit(&mut history);

        assert_eq!(history.depth(), 2);
        assert_eq!(history.current().to_string(), "/properties?max_price=3000&city=Brooklyn");
    }

    #[tokio::test]
    async fn test_price_dropdowns_are_exclusive() {
        let store = Arc::new(RecordingStore::default());
        let (mut page, _handle) = HomePage::mount(store, &AppConfig::default());

        page.form_mut().toggle_dropdown(DropdownId::PropertyType);
        page.form_mut().toggle_dropdown(DropdownId::PriceMin);
        page.form_mut().toggle_dropdown(DropdownId::PriceMax);

        let dropdowns = page.form().dropdowns();
        assert!(dropdowns.is_open(DropdownId::PropertyType));
        assert!(!dropdowns.is_open(DropdownId::PriceMin));
        assert!(dropdowns.is_open(DropdownId::PriceMax));
    }

    #[tokio::test]
    async fn test_hero_loading_then_empty() {
        let store = Arc::new(RecordingStore::default());
        let (page, handle) = HomePage::mount(store, &AppConfig::default());
        assert_eq!(page.render_hero(), HeroView::Loading);

        handle.await.unwrap();
        assert_eq!(page.render_hero(), HeroView::Empty);
    }

    #[tokio::test]
    async fn test_retry_cover_images() {
        let store = Arc::new(RecordingStore::default());
        let (page, handle) = HomePage::mount(store.clone(), &AppConfig::default());
        handle.await.unwrap();
        store.set_state(StoreState {
            cover_images_error: Some("cdn down".into()),
            ..StoreState::default()
        });
        assert_eq!(page.render_hero(), HeroView::Error { message: "cdn down".into() });

        page.retry_cover_images().await.unwrap();
        assert_eq!(
            store.calls(),
            vec![
                Call::FetchCoverImages,
                Call::ClearCoverImagesError,
                Call::FetchCoverImages,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_slides_rotate_after_sync() {
        let store = Arc::new(RecordingStore::default());
        store.set_state(StoreState {
            cover_images: sample::cover_images(),
            ..StoreState::default()
        });
        let (mut page, handle) = HomePage::mount(store, &AppConfig::default());
        handle.await.unwrap();
        page.sync_slides();

        tokio::time::sleep(Duration::from_millis(3001)).await;
        match page.render_hero() {
            HeroView::Slides { active, slides } => {
                assert_eq!(slides.len(), 3);
                assert_eq!(active, 1);
            }
            other => panic!("expected slides, got {:?}", other),
        }
    }
}
