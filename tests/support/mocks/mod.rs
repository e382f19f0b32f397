// tests/support/mocks/mod.rs
mod security;
mod store;
mod time;

pub use security::{DummyPasswordHasher, StaticTokenManager, TEST_PASSWORD};
pub use store::InMemoryStore;
pub use time::ManualClock;
