// src/application/ports/mod.rs
//! Outbound seams the use cases depend on; adapters live in `infrastructure`.
pub mod security;
pub mod time;
pub mod util;
