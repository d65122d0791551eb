//! vidgen-http - HTTP generation backend.

mod backend;

pub use backend::HttpBackend;
