pub mod loader;
pub mod search_store;
