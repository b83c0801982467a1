//! Featured entry rotation.
//!
//! The rotator keeps two unrelated pieces of state over one catalog: the
//! featured position that the banner timer advances, and the entry the user
//! is inspecting in the detail modal. Inspecting never moves the rotation and
//! ticking never changes what is being inspected.

use std::rc::Rc;

use yew::functional::Reducible;

use crate::models::catalog::{Catalog, CatalogEntry};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RotatorError {
    /// The catalog has no entries yet. Render a placeholder.
    #[error("catalog is not ready")]
    NotReady,

    #[error("no entry with id '{0}'")]
    UnknownEntry(String),
}

#[derive(Debug, Clone)]
pub struct FeaturedRotator<'a> {
    catalog: &'a Catalog,
    index: usize,
    selected: Option<String>,
}

impl<'a> FeaturedRotator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            index: 0,
            selected: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The featured entry.
    pub fn current(&self) -> Result<&'a CatalogEntry, RotatorError> {
        self.catalog.get(self.index).ok_or(RotatorError::NotReady)
    }

    /// Advances to the next entry, wrapping at the end. Identity for lists
    /// of zero or one entries.
    pub fn tick(&mut self) {
        let len = self.catalog.len();
        if len > 1 {
            self.index = (self.index + 1) % len;
        }
    }

    /// Marks `id` as the inspected entry. The featured index is untouched.
    pub fn select(&mut self, id: &str) -> Result<(), RotatorError> {
        if self.catalog.find(id).is_none() {
            return Err(RotatorError::UnknownEntry(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn inspected(&self) -> Option<&'a CatalogEntry> {
        self.selected_id().and_then(|id| self.catalog.find(id))
    }
}

impl PartialEq for FeaturedRotator<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.catalog, other.catalog)
            && self.index == other.index
            && self.selected == other.selected
    }
}

pub enum RotatorAction {
    Tick,
    Select(String),
    ClearSelection,
}

/// Rotator over one of the static tables, driven through `use_reducer`.
pub type RotatorState = FeaturedRotator<'static>;

impl Reducible for FeaturedRotator<'static> {
    type Action = RotatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RotatorAction::Tick => next.tick(),
            RotatorAction::Select(id) => {
                if let Err(e) = next.select(&id) {
                    log::warn!("Ignoring selection: {}", e);
                    return self;
                }
            }
            RotatorAction::ClearSelection => next.clear_selection(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::test_entry;

    fn catalog_of(ids: &[&str]) -> Catalog {
        Catalog::new(ids.iter().map(|id| test_entry(id, "Streaming")).collect()).unwrap()
    }

    fn leaked(ids: &[&str]) -> &'static Catalog {
        Box::leak(Box::new(catalog_of(ids)))
    }

    fn current_id(rotator: &FeaturedRotator<'_>) -> String {
        rotator.current().unwrap().id.clone()
    }

    #[test]
    fn test_starts_at_first_entry() {
        let catalog = catalog_of(&["A", "B", "C"]);
        let rotator = FeaturedRotator::new(&catalog);
        assert_eq!(rotator.index(), 0);
        assert_eq!(current_id(&rotator), "A");
        assert!(rotator.inspected().is_none());
    }

    #[test]
    fn test_tick_advances_and_wraps() {
        let catalog = catalog_of(&["A", "B", "C"]);
        let mut rotator = FeaturedRotator::new(&catalog);

        rotator.tick();
        assert_eq!(current_id(&rotator), "B");
        rotator.tick();
        assert_eq!(current_id(&rotator), "C");
        rotator.tick();
        assert_eq!(current_id(&rotator), "A");
    }

    #[test]
    fn test_n_ticks_return_to_start() {
        for n in 1..=7 {
            let ids: Vec<String> = (0..n).map(|i| format!("entry-{}", i)).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let catalog = catalog_of(&refs);
            let mut rotator = FeaturedRotator::new(&catalog);

            for start in 0..n {
                let before = rotator.index();
                assert_eq!(before, start);
                for _ in 0..n {
                    rotator.tick();
                }
                assert_eq!(rotator.index(), before, "n = {}", n);
                rotator.tick();
            }
        }
    }

    #[test]
    fn test_single_entry_tick_is_identity() {
        let catalog = catalog_of(&["A"]);
        let mut rotator = FeaturedRotator::new(&catalog);
        for _ in 0..100 {
            rotator.tick();
            assert_eq!(rotator.index(), 0);
        }
        assert_eq!(current_id(&rotator), "A");
    }

    #[test]
    fn test_empty_catalog_is_not_ready() {
        let catalog = Catalog::default();
        let mut rotator = FeaturedRotator::new(&catalog);
        assert_eq!(rotator.current().unwrap_err(), RotatorError::NotReady);
        rotator.tick();
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current().unwrap_err(), RotatorError::NotReady);
    }

    #[test]
    fn test_select_does_not_move_featured() {
        let catalog = catalog_of(&["A", "B", "C"]);
        let mut rotator = FeaturedRotator::new(&catalog);

        rotator.select("B").unwrap();
        assert_eq!(rotator.inspected().map(|e| e.id.as_str()), Some("B"));
        assert_eq!(current_id(&rotator), "A");
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn test_rotation_continues_while_inspecting() {
        let catalog = catalog_of(&["A", "B", "C"]);
        let mut rotator = FeaturedRotator::new(&catalog);

        rotator.select("C").unwrap();
        rotator.tick();
        rotator.tick();
        assert_eq!(current_id(&rotator), "C");
        assert_eq!(rotator.selected_id(), Some("C"));
        rotator.tick();
        assert_eq!(current_id(&rotator), "A");
        assert_eq!(rotator.selected_id(), Some("C"));
    }

    #[test]
    fn test_clear_selection_after_any_rotation() {
        let catalog = catalog_of(&["A", "B", "C"]);
        for ticks in 0..5 {
            let mut rotator = FeaturedRotator::new(&catalog);
            for _ in 0..ticks {
                rotator.tick();
            }
            let index = rotator.index();
            rotator.select("B").unwrap();
            rotator.clear_selection();
            assert!(rotator.inspected().is_none());
            assert_eq!(rotator.index(), index);
        }
    }

    #[test]
    fn test_select_unknown_keeps_previous_selection() {
        let catalog = catalog_of(&["A", "B"]);
        let mut rotator = FeaturedRotator::new(&catalog);
        rotator.select("A").unwrap();

        let err = rotator.select("Z").unwrap_err();
        assert_eq!(err, RotatorError::UnknownEntry("Z".to_string()));
        assert_eq!(rotator.selected_id(), Some("A"));
    }

    #[test]
    fn test_reducer_actions() {
        let state = Rc::new(RotatorState::new(leaked(&["A", "B", "C"])));

        let state = state.reduce(RotatorAction::Tick);
        assert_eq!(state.index(), 1);

        let state = state.reduce(RotatorAction::Select("C".to_string()));
        assert_eq!(state.selected_id(), Some("C"));
        assert_eq!(state.index(), 1);

        let state = state.reduce(RotatorAction::ClearSelection);
        assert!(state.selected_id().is_none());
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn test_reducer_ignores_unknown_selection() {
        let state = Rc::new(RotatorState::new(leaked(&["A", "B"])));
        let next = Rc::clone(&state).reduce(RotatorAction::Select("missing".to_string()));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
