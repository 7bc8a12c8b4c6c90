//! Draft filter form shared by the home search box and the listing sidebar

use crate::filters::{
    FilterState, BATHROOM_OPTIONS, BEDROOM_OPTIONS, FURNISHING_OPTIONS, PRICE_STEPS,
    PROPERTY_TYPE_OPTIONS, STATUS_OPTIONS,
};
use crate::ui::{edit_price, DropdownId, DropdownSet, PriceBound};

/// Edits a draft `FilterState` locally; nothing reaches the store until the
/// owning page submits or applies it.
#[derive(Debug, Clone)]
pub struct FilterForm {
    draft: FilterState,
    dropdowns: DropdownSet,
}

impl FilterForm {
    pub fn new(draft: FilterState, dropdowns: DropdownSet) -> Self {
        Self { draft, dropdowns }
    }

    pub fn draft(&self) -> &FilterState {
        &self.draft
    }

    pub fn dropdowns(&self) -> &DropdownSet {
        &self.dropdowns
    }

    pub fn set_keyword(&mut self, keyword: &str) {
        self.draft.keyword = keyword.to_string();
    }

    pub fn set_city(&mut self, city: &str) {
        self.draft.city = city.to_string();
    }

    /// Typed price input
    pub fn edit_price(&mut self, bound: PriceBound, input: &str) {
        edit_price(&mut self.draft.price_range, bound, input);
    }

    pub fn toggle_dropdown(&mut self, id: DropdownId) {
        self.dropdowns.toggle(id);
    }

    pub fn outside_click(&mut self, inside: Option<DropdownId>) {
        self.dropdowns.outside_click(inside);
    }

    /// Pick an option from dropdown `id`: assigns the draft field and closes it
    pub fn select_option(&mut self, id: DropdownId, value: &str) {
        let slot = match id {
            DropdownId::PropertyType => &mut self.draft.property_type,
            DropdownId::Bedrooms => &mut self.draft.bedrooms,
            DropdownId::Bathrooms => &mut self.draft.bathrooms,
            DropdownId::Furnishing => &mut self.draft.furnishing,
            DropdownId::Status => &mut self.draft.status,
            DropdownId::Location => &mut self.draft.city,
            DropdownId::PriceMin | DropdownId::PriceMax => {
                let bound = if id == DropdownId::PriceMin {
                    PriceBound::Min
                } else {
                    PriceBound::Max
                };
                edit_price(&mut self.draft.price_range, bound, value);
                self.dropdowns.close(id);
                return;
            }
        };
        self.dropdowns.select(id, slot, value.to_string());
    }

    /// Choices offered by dropdown `id`; the location picker is free text
    pub fn options(id: DropdownId) -> Vec<String> {
        let tags: &[&str] = match id {
            DropdownId::PropertyType => PROPERTY_TYPE_OPTIONS,
            DropdownId::Bedrooms => BEDROOM_OPTIONS,
            DropdownId::Bathrooms => BATHROOM_OPTIONS,
            DropdownId::Furnishing => FURNISHING_OPTIONS,
            DropdownId::Status => STATUS_OPTIONS,
            DropdownId::Location => &[],
            DropdownId::PriceMin | DropdownId::PriceMax => {
                return PRICE_STEPS.iter().map(|p| p.to_string()).collect();
            }
        };
        tags.iter().map(|t| t.to_string()).collect()
    }

    /// Restore the default draft and close every dropdown
    pub fn clear(&mut self) {
        self.draft = FilterState::default();
        self.dropdowns.outside_click(None);
    }
}
