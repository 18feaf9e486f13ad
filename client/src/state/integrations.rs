//! Integration hub state.

#[cfg(test)]
#[path = "integrations_test.rs"]
mod integrations_test;

use storyboard::integration::{Category, Integration, IntegrationHub};

#[derive(Clone, Debug, Default)]
pub struct IntegrationState {
    pub hub: IntegrationHub,
    pub category: Option<Category>,
    /// Integration whose setup dialog is open.
    pub setup: Option<&'static Integration>,
    pub setup_key: String,
    /// Ids with a connect call in flight.
    pub connecting: Vec<&'static str>,
}

impl IntegrationState {
    #[must_use]
    pub fn is_connecting(&self, id: &str) -> bool {
        self.connecting.contains(&id)
    }

    pub fn finish_connecting(&mut self, id: &str) {
        self.connecting.retain(|c| *c != id);
    }

    pub fn close_setup(&mut self) {
        self.setup = None;
        self.setup_key.clear();
    }
}
