//! vidgen-file - Filesystem-backed durable storage.

mod store;

pub use store::FileStore;
