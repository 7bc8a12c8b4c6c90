use crate::filters::{FilterState, FilterSync};
use crate::models::Pagination;
use crate::navigation::History;
use crate::pages::cards::PropertyCard;
use crate::pages::form::FilterForm;
use crate::store::PropertyStore;
use crate::ui::DropdownSet;
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// What the listing page shows for the current store state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListingView {
    Loading,
    /// Shown with a retry button
    Error { message: String },
    Empty { search_mode: bool },
    Results {
        cards: Vec<PropertyCard>,
        pagination: Option<Pagination>,
        search_mode: bool,
    },
}

/// Property listing page: filter sidebar plus result grid
pub struct ListingPage {
    sync: FilterSync,
    form: FilterForm,
}

impl ListingPage {
    /// Mount the page once for the current history entry
    pub fn mount(store: Arc<dyn PropertyStore>, history: &mut History) -> (Self, JoinHandle<()>) {
        let (sync, handle) = FilterSync::mount(store, history);
        // Sidebar dropdowns are independent of each other
        let form = FilterForm::new(sync.filters().clone(), DropdownSet::new());
        (Self { sync, form }, handle)
    }

    /// Filters behind the displayed results
    pub fn filters(&self) -> &FilterState {
        self.sync.filters()
    }

    pub fn is_search_mode(&self) -> bool {
        self.sync.is_search_mode()
    }

    pub fn form(&self) -> &FilterForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FilterForm {
        &mut self.form
    }

    /// Commit the sidebar draft
    pub fn apply(&mut self) -> JoinHandle<()> {
        self.sync.apply_filters(self.form.draft().clone())
    }

    pub fn reset(&mut self) -> JoinHandle<()> {
        self.form.clear();
        self.sync.reset_filters()
    }

    pub fn retry(&mut self) -> JoinHandle<()> {
        self.sync.retry()
    }

    /// Read-only view of the store state; never issues a store call
    pub fn render(&self) -> ListingView {
        let state = self.sync.store().snapshot();
        let search_mode = self.sync.is_search_mode();

        if state.properties_loading {
            ListingView::Loading
        } else if let Some(message) = state.properties_error {
            ListingView::Error { message }
        } else if state.properties.is_empty() {
            ListingView::Empty { search_mode }
        } else {
            ListingView::Results {
                cards: state.properties.iter().map(PropertyCard::from).collect(),
                pagination: state.properties_pagination,
                search_mode,
            }
        }
    }
}
