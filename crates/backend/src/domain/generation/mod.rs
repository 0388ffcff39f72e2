pub mod prompt;
pub mod sanitize;
pub mod schema;
pub mod service;
