use std::cell::Cell;
use std::rc::Rc;

/// Progress of a one-shot remote lookup as seen by a page.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

/// Shared "still wanted" marker for a spawned lookup. The effect that spawns
/// the lookup clears it on teardown, and the lookup only writes its result
/// back while the marker is still set.
#[derive(Debug, Clone)]
pub struct LiveFlag(Rc<Cell<bool>>);

impl LiveFlag {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    pub fn clear(&self) {
        self.0.set(false);
    }
}

impl Default for LiveFlag {
    fn default() -> Self {
        Self::new()
    }
}
