//! Domain entities - the objects the selection pipeline works with.

mod media;
mod session;

pub use media::{Album, MediaItem, MediaMetadata, PhotoMetadata};
pub use session::UserSession;
