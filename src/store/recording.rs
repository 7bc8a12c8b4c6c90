//! Call-recording store for unit tests

use crate::filters::FilterState;
use crate::store::traits::PropertyStore;
use crate::store::types::StoreState;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchProperties,
    SearchProperties(FilterState),
    FetchCoverImages,
    ClearPropertiesError,
    ClearCoverImagesError,
}

#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<Call>>,
    state: Mutex<StoreState>,
}

impl RecordingStore {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_state(&self, state: StoreState) {
        *self.state.lock().unwrap() = state;
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PropertyStore for RecordingStore {
    fn begin_properties_load(&self) {
        let mut state = self.state.lock().unwrap();
        state.properties_loading = true;
        state.properties_error = None;
    }

    fn begin_cover_images_load(&self) {
        let mut state = self.state.lock().unwrap();
        state.cover_images_loading = true;
        state.cover_images_error = None;
    }

    async fn fetch_properties(&self) -> Result<()> {
        self.record(Call::FetchProperties);
        self.state.lock().unwrap().properties_loading = false;
        Ok(())
    }

    async fn search_properties(&self, filters: &FilterState) -> Result<()> {
        self.record(Call::SearchProperties(filters.clone()));
        self.state.lock().unwrap().properties_loading = false;
        Ok(())
    }

    async fn fetch_cover_images(&self) -> Result<()> {
        self.record(Call::FetchCoverImages);
        self.state.lock().unwrap().cover_images_loading = false;
        Ok(())
    }

    fn clear_properties_error(&self) {
        self.record(Call::ClearPropertiesError);
        self.state.lock().unwrap().properties_error = None;
    }

    fn clear_cover_images_error(&self) {
        self.record(Call::ClearCoverImagesError);
        self.state.lock().unwrap().cover_images_error = None;
    }

    fn snapshot(&self) -> StoreState {
        self.state.lock().unwrap().clone()
    }

    fn store_name(&self) -> &'static str {
        "recording"
    }
}
