//! # Frame Infrastructure
//!
//! Concrete implementations of the ports defined in `frame-core`:
//! the remote photo library client, the per-user selection cache, session
//! storage, and the OAuth token refresher.

pub mod cache;
pub mod clock;
pub mod oauth;
pub mod photos;
pub mod session;

pub use cache::InMemorySelectionCache;
pub use clock::SystemClock;
pub use oauth::GoogleTokenRefresher;
pub use photos::{HttpTransport, PhotosApiClient, PhotosClientConfig};
pub use session::InMemorySessionStore;
