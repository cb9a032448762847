//! Per-user session state.

pub mod store;

pub use store::SessionStore;
