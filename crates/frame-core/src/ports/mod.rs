//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod cache;
mod clock;
mod library;
mod photos_api;
mod session;
mod token;

pub use cache::{CacheError, SelectionCache};
pub use clock::Clock;
pub use library::MediaLibrary;
pub use photos_api::{AlbumsOutcome, PhotosApi, SearchOutcome, SearchParams};
pub use session::{SessionError, SessionStore};
pub use token::{RefreshError, TokenRefresher};
