//! Gallery section: heading, thumbnail grid, and lightbox

use cellar_common::{GridLayout, ImageEntry, ImageSet};
use dioxus::prelude::*;

use crate::components::icons::PlusIcon;
use crate::components::lightbox::LightboxView;
use crate::hooks::use_lightbox;

/// Gallery section for the marketing page
///
/// `layout` only controls the grid; the lightbox walks all of `images`,
/// including ones the layout has no cell for.
#[component]
pub fn GalleryView(
    images: ImageSet,
    layout: GridLayout,
    #[props(into, default = "Our Space".to_string())] title: String,
) -> Element {
    let lightbox = use_lightbox(&images);
    let state = lightbox.state();

    let cells: Vec<(usize, ImageEntry, String)> = layout
        .cells
        .iter()
        .filter_map(|cell| {
            let image = images.get(cell.image_index)?.clone();
            Some((cell.image_index, image, layout.cell_class(cell)))
        })
        .collect();

    let current = if state.is_open {
        images.get(state.current_index).cloned()
    } else {
        None
    };

    rsx! {
        section {
            id: "gallery",
            class: "py-20 px-8 bg-gradient-to-b from-wine-black via-wine-gray to-wine-black",
            GalleryHeading { title }
            div { class: layout.container_class(),
                for (index , image , span_class) in cells {
                    GalleryCell {
                        key: "{index}",
                        image,
                        span_class,
                        on_open: move |_| lightbox.open(index),
                    }
                }
            }
        }

        if let Some(image) = current {
            LightboxView {
                image,
                position: state.current_index,
                total: images.len(),
                on_close: move |_| lightbox.close(),
                on_navigate: move |direction| lightbox.navigate(direction),
            }
        }
    }
}

/// Section title with the gold rule and green end dots
#[component]
fn GalleryHeading(title: String) -> Element {
    rsx! {
        div { class: "text-center mb-16 pt-20",
            h2 { class: "text-5xl text-wine-gold tracking-[3px] font-light uppercase mb-4",
                {title}
            }
            div { class: "relative w-24 h-0.5 bg-wine-gold mx-auto",
                div { class: "absolute top-1/2 -translate-y-1/2 -left-5 w-2 h-2 bg-wine-green rounded-full" }
                div { class: "absolute top-1/2 -translate-y-1/2 -right-5 w-2 h-2 bg-wine-green rounded-full" }
            }
        }
    }
}

/// Clickable thumbnail
#[component]
fn GalleryCell(image: ImageEntry, span_class: String, on_open: EventHandler<()>) -> Element {
    let ImageEntry { source, label } = image;

    rsx! {
        button {
            class: "{span_class} relative overflow-hidden cursor-pointer border-2 border-transparent transition-all duration-300 hover:border-wine-gold hover:scale-[1.02] hover:z-10 group",
            aria_label: "Open {label}",
            onclick: move |_| on_open.call(()),
            img {
                src: "{source}",
                alt: "{label}",
                loading: "lazy",
                class: "w-full h-full object-cover transition-transform duration-500 group-hover:scale-110",
            }
            div { class: "absolute inset-0 bg-gradient-to-br from-wine-gold/80 to-wine-green/80 flex items-center justify-center opacity-0 transition-opacity duration-300 group-hover:opacity-100",
                PlusIcon { class: "w-12 h-12 text-white" }
            }
        }
    }
}
