use crate::Route;
use cellar_common::LayoutVariant;
use dioxus::prelude::*;

#[component]
pub fn SiteLayout() -> Element {
    let current_route = use_route::<Route>();

    rsx! {
        nav { class: "fixed top-0 inset-x-0 z-50 flex justify-end gap-6 px-8 py-4 bg-wine-black/80 text-sm uppercase tracking-[2px]",
            for variant in LayoutVariant::ALL {
                {
                    let route = Route::for_variant(variant);
                    let slug = variant.slug();
                    let label = variant.label();
                    let class = if route == current_route {
                        "text-wine-gold"
                    } else {
                        "text-wine-light-gold/60 hover:text-wine-gold transition-colors"
                    };
                    rsx! {
                        Link { key: "{slug}", to: route, class: "{class}", "{label}" }
                    }
                }
            }
        }
        Outlet::<Route> {}
    }
}
