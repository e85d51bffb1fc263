mod gallery;
mod layout;

pub use gallery::{DesktopGallery, GalleryPage};
pub use layout::SiteLayout;
