//! Hypixel public API access

pub mod client;
pub mod error;
pub mod mojang;

pub use client::{HypixelApi, HypixelClient};
pub use error::ApiError;
pub use mojang::resolve_uuid;
