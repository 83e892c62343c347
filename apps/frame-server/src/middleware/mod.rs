//! Request middleware: session extraction and error responses.

pub mod auth;
pub mod error;
