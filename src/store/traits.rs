use crate::filters::FilterState;
use crate::store::types::StoreState;
use anyhow::Result;
use async_trait::async_trait;

/// Data layer the pages call into.
///
/// Calls publish their outcome into shared state (`snapshot`) rather than
/// returning data, so a newer call simply overwrites an older one's result.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Mark a property load as in flight and clear any stored error.
    ///
    /// Called synchronously before the load itself is spawned, so a render
    /// in between never pairs new filters with the previous results.
    fn begin_properties_load(&self);

    /// Cover image counterpart of `begin_properties_load`
    fn begin_cover_images_load(&self);

    /// Load the unfiltered listing
    async fn fetch_properties(&self) -> Result<()>;

    /// Load listings matching `filters`
    async fn search_properties(&self, filters: &FilterState) -> Result<()>;

    /// Load the hero carousel slides
    async fn fetch_cover_images(&self) -> Result<()>;

    fn clear_properties_error(&self);

    fn clear_cover_images_error(&self);

    /// Current loading/error/result state
    fn snapshot(&self) -> StoreState;

    /// Name used in log lines
    fn store_name(&self) -> &'static str;
}
