//! Source file resolution and parsing.
//!
//! A path is first matched against the bundled datasets compiled into the
//! binary, then tried on the filesystem, mirroring how the original tool
//! fell back from packaged resources to user-supplied files.

use std::fs;

use serde_json::Value;
use tracing::info;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::RawRecord;
use crate::schema::entity::{ORGANIZATIONS_FILENAME, TICKETS_FILENAME, USERS_FILENAME};

const BUNDLED_DATASETS: &[(&str, &str)] = &[
    (ORGANIZATIONS_FILENAME, include_str!("../../data/organizations.json")),
    (TICKETS_FILENAME, include_str!("../../data/tickets.json")),
    (USERS_FILENAME, include_str!("../../data/users.json")),
];

/// Read and parse one source file into raw records.
pub fn read_records(path: &str) -> Result<Vec<RawRecord>> {
    info!("Looking for {} among bundled datasets...", path);
    let contents = match BUNDLED_DATASETS.iter().find(|(name, _)| *name == path) {
        Some((_, bundled)) => (*bundled).to_string(),
        None => {
            info!("Looking for {} on the filesystem...", path);
            fs::read_to_string(path)?
        }
    };
    parse_records(path, &contents)
}

fn parse_records(path: &str, contents: &str) -> Result<Vec<RawRecord>> {
    match serde_json::from_str(contents)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(record) => Ok(record),
                other => Err(Error::new(
                    ErrorKind::Parse,
                    format!("{}: expected one JSON object per record, got {}", path, other),
                )),
            })
            .collect(),
        other => Err(Error::new(
            ErrorKind::Parse,
            format!("{}: expected a top-level JSON array, got {}", path, other),
        )),
    }
}
