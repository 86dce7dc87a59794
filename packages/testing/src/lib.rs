#![cfg(not(target_arch = "wasm32"))]

/// Record builders
mod helpers;
mod snapshots;

pub use helpers::*;
pub use snapshots::*;
