//! # Frame Shared
//!
//! Wire types shared between the frame backend and its frontend.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
