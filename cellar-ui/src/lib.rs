//! cellar-ui - Gallery view components
//!
//! Pure view components plus the browser glue they need (window key
//! listener, body scroll lock). Gallery logic lives in `cellar-common`.

pub mod components;
pub mod hooks;
pub mod wasm_utils;

pub use components::*;
pub use hooks::{use_lightbox, LightboxHandle};
