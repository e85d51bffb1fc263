use crate::catalog::load_gallery;
use cellar_common::LayoutVariant;
use cellar_ui::GalleryView;
use dioxus::prelude::*;
use tracing::{debug, error};

#[component]
pub fn GalleryPage() -> Element {
    rsx! {
        GallerySection { variant: LayoutVariant::Responsive }
    }
}

#[component]
pub fn DesktopGallery() -> Element {
    rsx! {
        GallerySection { variant: LayoutVariant::Desktop }
    }
}

#[component]
fn GallerySection(variant: LayoutVariant) -> Element {
    let gallery = use_hook(move || {
        let layout = variant.layout();
        match load_gallery(&layout) {
            Ok(images) => {
                let ungridded = layout.ungridded_indices(&images);
                if !ungridded.is_empty() {
                    debug!(
                        "Layout '{}' has no cell for images {:?}; viewer still shows them",
                        layout.name, ungridded
                    );
                }
                Ok((images, layout))
            }
            Err(e) => {
                error!("Gallery unavailable: {e}");
                Err(e)
            }
        }
    });

    match gallery {
        Ok((images, layout)) => rsx! {
            GalleryView { images, layout }
        },
        Err(e) => rsx! {
            div { class: "py-20 text-center text-wine-light-gold", "Gallery unavailable: {e}" }
        },
    }
}
