//! Single-slot error banner. A new message replaces the old one.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Banner {
    message: Option<String>,
}

impl Banner {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
