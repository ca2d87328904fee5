//! Blob storage gateway

pub mod blob;

pub use blob::{BlobReader, BlobStorage, FsBlobStorage};
