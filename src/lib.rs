pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod fetch;
pub mod flatten;
pub mod geometry;
pub mod i18n;
pub mod locale;
pub mod model;
pub mod schema;
pub mod sink;
