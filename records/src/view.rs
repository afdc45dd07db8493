//! A list paired with its editor dialog.
//!
//! Mutations never patch rows locally: a successful create, update or delete
//! closes the dialog and starts exactly one re-fetch.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::draft::Draft;
use crate::editor::Editor;
use crate::list::{FetchTicket, ListState};

#[derive(Clone, Debug)]
pub struct RecordView<D: Draft> {
    pub list: ListState<D::Record>,
    pub editor: Editor<D>,
}

impl<D: Draft + Default> Default for RecordView<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: Draft> RecordView<D> {
    #[must_use]
    pub fn new(blank: D) -> Self {
        Self {
            list: ListState::default(),
            editor: Editor::new(blank),
        }
    }

    pub fn refresh(&mut self) -> FetchTicket {
        self.list.begin_fetch()
    }

    /// Create or update accepted by the server.
    pub fn submit_succeeded(&mut self) -> FetchTicket {
        self.editor.on_success();
        self.list.begin_fetch()
    }

    /// Delete accepted by the server.
    pub fn delete_succeeded(&mut self) -> FetchTicket {
        self.list.begin_fetch()
    }

    /// Start over with a new create template, e.g. after the session user changes.
    pub fn rebind(&mut self, blank: D) {
        self.editor = Editor::new(blank);
        self.list.reset();
    }

    /// Unmount or logout: close the dialog and drop in-flight loads.
    pub fn reset(&mut self) {
        self.editor.on_success();
        self.list.reset();
    }
}
