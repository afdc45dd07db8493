//! Load state for one fetched collection.
//!
//! DESIGN
//! ======
//! Every fetch takes a [`FetchTicket`] stamped with a generation number.
//! Only the newest ticket may write rows or status; anything older, or any
//! ticket issued before a [`ListState::reset`], is discarded on arrival.
//! Rows from the last good load stay visible while a new fetch is in flight
//! and after a failed one.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Proof that a fetch was started; hand it back with the response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Outcome of handing a response back to the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Failed(String),
    Stale,
}

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub rows: Vec<T>,
    pub status: LoadStatus,
    generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            status: LoadStatus::Idle,
            generation: 0,
        }
    }
}

impl<T> ListState<T> {
    /// Mark loading and supersede every earlier ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        FetchTicket(self.generation)
    }

    /// Apply `result` if `ticket` is still the newest.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<Vec<T>, String>) -> Resolution {
        if ticket.0 != self.generation {
            return Resolution::Stale;
        }
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.status = LoadStatus::Loaded;
                Resolution::Applied
            }
            Err(message) => {
                self.status = LoadStatus::Failed(message.clone());
                Resolution::Failed(message)
            }
        }
    }

    /// Drop rows and invalidate outstanding tickets.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.rows.clear();
        self.status = LoadStatus::Idle;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }
}
