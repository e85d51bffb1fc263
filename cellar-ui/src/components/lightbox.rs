//! Lightbox view component

use cellar_common::{Direction, ImageEntry};
use dioxus::prelude::*;

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};

const NAV_BUTTON_CLASS: &str = "absolute top-1/2 -translate-y-1/2 bg-wine-gold/30 text-white border-2 border-wine-gold px-4 py-3 cursor-pointer transition-all duration-300 hover:bg-wine-gold hover:text-wine-black";

/// Full-screen single image viewer
///
/// Clicking the backdrop closes it. Clicks on the image and the arrows are
/// stopped so they don't reach the backdrop.
#[component]
pub fn LightboxView(
    /// Image to show
    image: ImageEntry,
    /// Zero-based position of `image` in the gallery
    position: usize,
    /// Number of images in the gallery
    total: usize,
    on_close: EventHandler<()>,
    on_navigate: EventHandler<Direction>,
) -> Element {
    let ImageEntry { source, label } = image;

    rsx! {
        div {
            class: "fixed inset-0 z-[2000] bg-black/95 flex items-center justify-center",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{label}",
            onclick: move |_| on_close.call(()),

            // Close button
            button {
                class: "absolute top-8 right-12 text-wine-gold cursor-pointer transition-colors duration-300 hover:text-white",
                aria_label: "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(());
                },
                XIcon { class: "w-10 h-10" }
            }

            // Image counter
            if total > 1 {
                div { class: "absolute top-8 left-12 text-wine-light-gold text-sm tracking-[2px]",
                    {format!("{} / {}", position + 1, total)}
                }
            }

            img {
                src: "{source}",
                alt: "{label}",
                class: "max-w-[90%] max-h-[90%] object-contain border-4 border-wine-gold",
                onclick: move |e| e.stop_propagation(),
            }

            if total > 1 {
                button {
                    class: "{NAV_BUTTON_CLASS} left-8",
                    aria_label: "Previous image",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_navigate.call(Direction::Previous);
                    },
                    ChevronLeftIcon {}
                }
                button {
                    class: "{NAV_BUTTON_CLASS} right-8",
                    aria_label: "Next image",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_navigate.call(Direction::Next);
                    },
                    ChevronRightIcon {}
                }
            }
        }
    }
}
