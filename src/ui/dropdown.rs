//! Open/closed state for the filter dropdowns

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DropdownId {
    PropertyType,
    Bedrooms,
    Bathrooms,
    Furnishing,
    Status,
    Location,
    PriceMin,
    PriceMax,
}

/// Tracks which dropdowns are open.
///
/// Dropdowns are independent unless placed in the same exclusive group, in
/// which case opening one closes the others in its group.
#[derive(Debug, Clone, Default)]
pub struct DropdownSet {
    open: BTreeSet<DropdownId>,
    exclusive_groups: Vec<Vec<DropdownId>>,
}

impl DropdownSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group whose members close each other when opened
    pub fn with_exclusive_group(mut self, group: &[DropdownId]) -> Self {
        self.exclusive_groups.push(group.to_vec());
        self
    }

    pub fn is_open(&self, id: DropdownId) -> bool {
        self.open.contains(&id)
    }

    pub fn open_dropdowns(&self) -> impl Iterator<Item = DropdownId> + '_ {
        self.open.iter().copied()
    }

    /// Trigger click
    pub fn toggle(&mut self, id: DropdownId) {
        if self.open.remove(&id) {
            return;
        }
        for group in self.exclusive_groups.iter().filter(|g| g.contains(&id)) {
            for sibling in group {
                self.open.remove(sibling);
            }
        }
        self.open.insert(id);
    }

    pub fn close(&mut self, id: DropdownId) {
        self.open.remove(&id);
    }

    /// Pointer event landing inside `inside` (or on no dropdown at all).
    /// Every other open dropdown closes.
    pub fn outside_click(&mut self, inside: Option<DropdownId>) {
        self.open.retain(|id| Some(*id) == inside);
    }

    /// Assign an option value and close the dropdown in one step
    pub fn select<T>(&mut self, id: DropdownId, slot: &mut T, value: T) {
        *slot = value;
        self.close(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut set = DropdownSet::new();
        set.toggle(DropdownId::Bedrooms);
        assert!(set.is_open(DropdownId::Bedrooms));
        set.toggle(DropdownId::Bedrooms);
        assert!(!set.is_open(DropdownId::Bedrooms));
    }

    #[test]
    fn test_ungrouped_dropdowns_stay_open_together() {
        let mut set = DropdownSet::new();
        set.toggle(DropdownId::Bedrooms);
        set.toggle(DropdownId::Status);
        assert!(set.is_open(DropdownId::Bedrooms));
        assert!(set.is_open(DropdownId::Status));
    }

    #[test]
    fn test_exclusive_group_closes_sibling() {
        let mut set = DropdownSet::new()
            .with_exclusive_group(&[DropdownId::PriceMin, DropdownId::PriceMax]);
        set.toggle(DropdownId::Location);
        set.toggle(DropdownId::PriceMin);
        set.toggle(DropdownId::PriceMax);

        assert!(!set.is_open(DropdownId::PriceMin));
        assert!(set.is_open(DropdownId::PriceMax));
        assert!(set.is_open(DropdownId::Location));
    }

    #[test]
    fn test_outside_click() {
        let mut set = DropdownSet::new();
        set.toggle(DropdownId::Furnishing);
        set.toggle(DropdownId::Bathrooms);

        set.outside_click(Some(DropdownId::Bathrooms));
        assert_eq!(set.open_dropdowns().collect::<Vec<_>>(), vec![DropdownId::Bathrooms]);

        set.outside_click(None);
        assert_eq!(set.open_dropdowns().count(), 0);
    }

    #[test]
    fn test_select_assigns_and_closes() {
        let mut set = DropdownSet::new();
        let mut status = String::from("all");
        set.toggle(DropdownId::Status);

        set.select(DropdownId::Status, &mut status, "available".to_string());
        assert_eq!(status, "available");
        assert!(!set.is_open(DropdownId::Status));
    }
}
