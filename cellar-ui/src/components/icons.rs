//! Lightbox icons (Lucide icon set, https://lucide.dev)
//!
//! Stroked with `currentColor`, so they take the text color of their button.

use dioxus::prelude::*;

/// Shared 24x24 stroked SVG frame
#[component]
fn StrokeIcon(class: &'static str, stroke_width: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            aria_hidden: "true",
            {children}
        }
    }
}

/// X icon (close)
#[component]
pub fn XIcon(#[props(default = "w-8 h-8")] class: &'static str) -> Element {
    rsx! {
        StrokeIcon { class, stroke_width: "1.5",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

/// Chevron left icon (previous image)
#[component]
pub fn ChevronLeftIcon(
    #[props(default = "w-8 h-8")] class: &'static str,
    #[props(default = "2")] stroke_width: &'static str,
) -> Element {
    rsx! {
        StrokeIcon { class, stroke_width,
            path { d: "m15 18-6-6 6-6" }
        }
    }
}

/// Chevron right icon (next image)
#[component]
pub fn ChevronRightIcon(
    #[props(default = "w-8 h-8")] class: &'static str,
    #[props(default = "2")] stroke_width: &'static str,
) -> Element {
    rsx! {
        StrokeIcon { class, stroke_width,
            path { d: "m9 18 6-6-6-6" }
        }
    }
}

/// Plus icon (thumbnail hover hint)
#[component]
pub fn PlusIcon(#[props(default = "w-12 h-12")] class: &'static str) -> Element {
    rsx! {
        StrokeIcon { class, stroke_width: "1",
            path { d: "M5 12h14" }
            path { d: "M12 5v14" }
        }
    }
}
