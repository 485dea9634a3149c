//! API Module - Tauri command surface
//!
//! - `commands.rs`: handlers for the three dashboard views
//! - `engine_status.rs`: status payload structs

pub mod commands;
pub mod engine_status;
