//! Remote photo library client.

mod client;
mod transport;

pub use client::{PhotosApiClient, PhotosClientConfig};
pub use transport::{AlbumsPage, HttpTransport, SearchPage, SearchTransport};
