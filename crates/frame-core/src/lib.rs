//! # Frame Core
//!
//! The domain layer of the photo-frame backend.
//! This crate contains the photo-selection pipeline with zero infrastructure
//! dependencies: remote APIs, caches, and session storage are reached only
//! through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod retry;
pub mod sample;
pub mod selection;

pub use error::{ApiError, LibraryError};
pub use retry::SessionLibrary;
pub use selection::PhotoPicker;
