//! cellar-common - Gallery logic shared by the UI and web crates
//!
//! Everything here is pure: no DOM, no signals. The view layer owns a
//! [`Viewer`] and feeds it clicks and key presses.

mod error;
pub mod images;
pub mod keys;
pub mod layout;
pub mod scroll_lock;
pub mod theme;
pub mod viewer;

pub use error::{GalleryError, ThemeError};
pub use images::{ImageEntry, ImageSet};
pub use keys::ViewerCommand;
pub use layout::{CellSpan, GridCell, GridLayout, LayoutVariant, ResponsiveSpan};
pub use scroll_lock::ScrollLock;
pub use theme::{Palette, ThemeColor};
pub use viewer::{Direction, Viewer, ViewerState};
