//! Two-mode (create / edit) editor state for a single dialog.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::draft::{Draft, DraftError};
use crate::entity::Record;

/// Whether the dialog creates a new record or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit { id: i64 },
}

/// What the caller should send once the form is submitted.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission<P> {
    Create(P),
    Update { id: i64, payload: P },
}

/// Dialog state: the active draft, its mode, and the last submit error.
#[derive(Clone, Debug)]
pub struct Editor<D: Draft> {
    blank: D,
    pub draft: D,
    pub mode: Mode,
    pub open: bool,
    pub error: Option<String>,
    /// A submission is awaiting the server.
    pub submitting: bool,
}

impl<D: Draft + Default> Default for Editor<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: Draft> Editor<D> {
    /// Editor whose create mode starts from `blank`.
    #[must_use]
    pub fn new(blank: D) -> Self {
        Self {
            draft: blank.clone(),
            blank,
            mode: Mode::Create,
            open: false,
            error: None,
            submitting: false,
        }
    }

    /// Open for a new record. A create draft in progress is kept.
    pub fn open_create(&mut self) {
        if self.mode != Mode::Create {
            self.draft = self.blank.clone();
            self.mode = Mode::Create;
        }
        self.error = None;
        self.open = true;
    }

    /// Open seeded from `record`.
    pub fn open_edit(&mut self, record: &D::Record) {
        self.draft = self.blank.edit_copy(record);
        self.mode = Mode::Edit { id: record.record_id() };
        self.error = None;
        self.open = true;
    }

    /// Cancel. Leaving edit mode drops the edit target.
    pub fn close(&mut self) {
        self.open = false;
        self.error = None;
        if matches!(self.mode, Mode::Edit { .. }) {
            self.reset();
        }
    }

    /// # Errors
    ///
    /// See [`Draft::set`].
    pub fn set(&mut self, field: D::Field, text: &str) -> Result<(), DraftError> {
        self.draft.set(field, text)
    }

    /// Validate the draft and build the request to send.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the message is also kept for display.
    pub fn submission(&mut self) -> Result<Submission<D::Payload>, DraftError> {
        if let Err(err) = self.draft.validate() {
            self.error = Some(err.to_string());
            return Err(err);
        }
        let payload = self.draft.payload();
        Ok(match self.mode {
            Mode::Create => Submission::Create(payload),
            Mode::Edit { id } => Submission::Update { id, payload },
        })
    }

    /// Like [`Editor::submission`], but yields `None` while an earlier
    /// submission is still in flight and marks this one as in flight.
    ///
    /// # Errors
    ///
    /// Returns the validation failure.
    pub fn begin_submit(&mut self) -> Result<Option<Submission<D::Payload>>, DraftError> {
        if self.submitting {
            return Ok(None);
        }
        let submission = self.submission()?;
        self.submitting = true;
        Ok(Some(submission))
    }

    /// The server accepted the submission.
    pub fn on_success(&mut self) {
        self.reset();
        self.open = false;
        self.error = None;
        self.submitting = false;
    }

    /// The server rejected the submission; the draft stays open for correction.
    pub fn on_failure(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.submitting = false;
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Edit { .. })
    }

    #[must_use]
    pub fn title(&self, noun: &str) -> String {
        match self.mode {
            Mode::Create => format!("Add {noun}"),
            Mode::Edit { .. } => format!("Edit {noun}"),
        }
    }

    fn reset(&mut self) {
        self.draft = self.blank.clone();
        self.mode = Mode::Create;
    }
}
