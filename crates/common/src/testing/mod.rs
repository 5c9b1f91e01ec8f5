#![cfg(any(test, feature = "testing"))]

// Test doubles for the email and blob storage collaborators
//
// Each double implements the production trait, so it can be injected wherever the real
// collaborator is expected. Every operation is backed by a `Stub`:
// - resolves immediately with a canned success value by default
// - can be reconfigured per test to resolve differently or to reject
// - records the arguments of every call for later assertions
//
// Construct fresh doubles in each test. Nothing here is global.

mod mock_blob_store;
mod mock_email_sender;
mod stub;

pub use mock_blob_store::{CopyFileCall, MockBlobStore};
pub use mock_email_sender::MockEmailSender;
pub use stub::Stub;

use crate::config::DoublesConfig;

/// Both collaborator doubles for one test case
#[derive(Clone, Debug, Default)]
pub struct TestCollaborators {
    pub email: MockEmailSender,
    pub storage: MockBlobStore,
}

impl TestCollaborators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &DoublesConfig) -> Self {
        Self {
            email: MockEmailSender::from_config(&config.email),
            storage: MockBlobStore::from_config(&config.storage),
        }
    }

    pub fn reset(&self) {
        self.email.reset();
        self.storage.reset();
    }
}

/// Install a fmt subscriber that writes through the test harness.
/// Safe to call from every test; only the first call installs it.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
