use std::cell::RefCell;

use super::types::AdviceClient;
use super::AdviceError;

/// Mock advice client for testing. Replies with a fixed text or fails.
pub struct MockAdviceClient {
    reply: Option<String>,
    calls: RefCell<Vec<(String, String)>>,
}

impl MockAdviceClient {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// (system, user) pairs seen so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }
}

impl AdviceClient for MockAdviceClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, AdviceError> {
        self.calls
            .borrow_mut()
            .push((system.to_string(), user.to_string()));
        self.reply
            .clone()
            .ok_or_else(|| AdviceError::Connection("mock://unavailable".into()))
    }
}
