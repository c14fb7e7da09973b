pub mod results;
pub mod service;
