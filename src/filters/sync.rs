use crate::filters::FilterState;
use crate::navigation::History;
use crate::store::PropertyStore;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// The two mutually exclusive listing queries
#[derive(Debug, Clone, PartialEq)]
pub enum StoreQuery {
    ListAll,
    Search(FilterState),
}

impl StoreQuery {
    /// Query matching `filters`: a search when they are active, otherwise the full list
    pub fn for_filters(filters: &FilterState) -> Self {
        if filters.is_active() {
            StoreQuery::Search(filters.clone())
        } else {
            StoreQuery::ListAll
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, StoreQuery::Search(_))
    }
}

/// Owns the listing page's filter state and keeps the store query in step with it.
///
/// Every store call is spawned and not awaited; callers that need to observe
/// completion can await the returned handle.
pub struct FilterSync {
    store: Arc<dyn PropertyStore>,
    filters: FilterState,
    search_mode: bool,
    last_query: StoreQuery,
}

impl FilterSync {
    /// One-shot initialization from the current URL.
    ///
    /// Active filters trigger a search and the query string is then stripped
    /// from the current history entry in place. Otherwise the full list is
    /// fetched and the URL is left alone.
    pub fn mount(store: Arc<dyn PropertyStore>, history: &mut History) -> (Self, JoinHandle<()>) {
        let filters = FilterState::from_query_pairs(history.current().query_pairs());
        info!("Mounting listing filters from {}", history.current());

        let mut sync = Self {
            store,
            filters: FilterState::default(),
            search_mode: false,
            last_query: StoreQuery::ListAll,
        };
        let handle = sync.apply_filters(filters);

        if sync.search_mode {
            let stripped = history.current().without_query();
            debug!("Stripping filter params, now at {}", stripped);
            history.replace(stripped);
        }

        (sync, handle)
    }

    /// Replace the filter state and issue exactly one store call for it
    pub fn apply_filters(&mut self, filters: FilterState) -> JoinHandle<()> {
        let query = StoreQuery::for_filters(&filters);
        self.filters = filters;
        self.search_mode = query.is_search();
        self.dispatch(query)
    }

    /// Back to defaults and the unfiltered list
    pub fn reset_filters(&mut self) -> JoinHandle<()> {
        self.filters = FilterState::default();
        self.search_mode = false;
        self.dispatch(StoreQuery::ListAll)
    }

    /// Clear the stored error and re-issue the last query
    pub fn retry(&mut self) -> JoinHandle<()> {
        info!("Retrying {:?}", self.last_query);
        self.store.clear_properties_error();
        self.dispatch(self.last_query.clone())
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn is_search_mode(&self) -> bool {
        self.search_mode
    }

    pub fn last_query(&self) -> &StoreQuery {
        &self.last_query
    }

    pub fn store(&self) -> &Arc<dyn PropertyStore> {
        &self.store
    }

    fn dispatch(&mut self, query: StoreQuery) -> JoinHandle<()> {
        self.last_query = query.clone();
        self.store.begin_properties_load();
        let store = Arc::clone(&self.store);

        tokio::spawn(async move {
            let result = match &query {
                StoreQuery::ListAll => store.fetch_properties().await,
                StoreQuery::Search(filters) => store.search_properties(filters).await,
            };
            if let Err(e) = result {
                warn!("{} store: {:?} failed: {:#}", store.store_name(), query, e);
            }
        })
    }
}
