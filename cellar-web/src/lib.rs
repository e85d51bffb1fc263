//! cellar-web - The wine bar site's gallery page

pub mod catalog;
pub mod pages;
pub mod theme;

use cellar_common::LayoutVariant;
use dioxus::prelude::*;
use pages::{DesktopGallery, GalleryPage, SiteLayout};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    GalleryPage {},
    #[route("/desktop")]
    DesktopGallery {},
}

impl Route {
    pub fn for_variant(variant: LayoutVariant) -> Self {
        match variant {
            LayoutVariant::Responsive => Route::GalleryPage {},
            LayoutVariant::Desktop => Route::DesktopGallery {},
        }
    }
}

#[component]
pub fn App() -> Element {
    let theme_color = use_hook(|| theme::browser_theme_color(&theme::site_palette()));

    rsx! {
        document::Meta { name: "theme-color", content: "{theme_color}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-wine-black", Router::<Route> {} }
    }
}
