use serde::Serialize;

use crate::modules::catalog::MovieId;

/// The single hover-expanded item of a list, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HoverState(Option<MovieId>);

impl HoverState {
    pub fn active(&self) -> Option<MovieId> {
        self.0
    }

    pub fn is_active(&self, id: MovieId) -> bool {
        self.0 == Some(id)
    }

    /// Make `id` the active item, replacing any other.
    pub fn activate(&mut self, id: MovieId) {
        self.0 = Some(id);
    }

    /// Clear only if `id` is the active item; a late leave from a previous
    /// item must not collapse the current one.
    pub fn clear(&mut self, id: MovieId) {
        if self.0 == Some(id) {
            self.0 = None;
        }
    }

    pub fn reset(&mut self) {
        self.0 = None;
    }
}
