//! Gallery components

pub mod gallery;
pub mod icons;
pub mod lightbox;

pub use gallery::GalleryView;
pub use icons::{ChevronLeftIcon, ChevronRightIcon, PlusIcon, XIcon};
pub use lightbox::LightboxView;
