//! # Blog Shared
//!
//! Types shared between the API server and frontend consumers.

pub mod cards;
pub mod dto;

pub use dto::MessageResponse;
