//! searchdesk: an in-memory record store over three related collections
//! (organizations, tickets, users) with a per-field inverted index, exact
//! match queries and cross-collection joins, fronted by a small shell.

pub mod core;
pub mod schema;
pub mod index;
pub mod store;
pub mod search;
pub mod shell;
