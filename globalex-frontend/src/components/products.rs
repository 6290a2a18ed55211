//! Catalog view with filter chips and per-product detail cards.

use dioxus::prelude::*;

use globalex_content::catalog::{filter_products, Product, ProductFilter};

use super::icons::{self, Icon};

#[component]
pub fn Products(on_contact: EventHandler<()>) -> Element {
    let mut active_filter = use_signal(ProductFilter::default);

    let filtered = filter_products(active_filter());

    rsx! {
        div { class: "bg-zinc-950 min-h-screen py-20 animate-fade-in",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "text-center mb-16",
                    h2 { class: "text-4xl md:text-5xl font-bold text-white mb-4", "Our Products" }
                    p { class: "text-zinc-400 text-xl",
                        "Premium export-grade charcoal products certified for quality and sustainability"
                    }
                }

                div { class: "flex flex-wrap justify-center gap-4 mb-16",
                    for filter in ProductFilter::ALL_FILTERS {
                        button {
                            key: "{filter.label()}",
                            class: if active_filter() == filter {
                                "px-6 py-2 rounded-full text-sm font-semibold transition-all duration-300 bg-emerald-600 text-white shadow-lg shadow-emerald-900/50"
                            } else {
                                "px-6 py-2 rounded-full text-sm font-semibold transition-all duration-300 bg-zinc-900 text-zinc-400 hover:text-white hover:bg-zinc-800 border border-zinc-800"
                            },
                            onclick: move |_| active_filter.set(filter),
                            "{filter.label()}"
                        }
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for product in filtered {
                        ProductCard { key: "{product.title}", product, on_contact }
                    }
                }
            }
        }
    }
}

#[component]
fn ProductCard(product: &'static Product, on_contact: EventHandler<()>) -> Element {
    rsx! {
        div { class: "bg-zinc-900/50 border border-zinc-800 rounded-2xl overflow-hidden hover:border-emerald-500/30 transition-all duration-300 flex flex-col group",
            div { class: "bg-zinc-900 h-64 flex items-center justify-center relative border-b border-zinc-800 group-hover:bg-zinc-800/80 transition-colors overflow-hidden",
                if product.featured {
                    span { class: "absolute top-4 right-4 bg-amber-600/90 text-white text-xs font-bold px-3 py-1 rounded-full z-10",
                        "Featured"
                    }
                }
                span { class: "absolute top-4 left-4 bg-zinc-800/90 text-zinc-300 border border-zinc-700 text-xs font-bold px-3 py-1 rounded-full z-10",
                    "{product.tag}"
                }
                img {
                    src: "{product.image}",
                    alt: "{product.title}",
                    class: "w-full h-full object-cover transition-transform duration-500 transform group-hover:scale-110",
                }
            }

            div { class: "p-8 flex-1 flex flex-col",
                h3 { class: "text-xl font-bold text-white mb-3", "{product.title}" }
                p { class: "text-zinc-400 text-sm mb-6 min-h-[40px]", "{product.description}" }

                div { class: "space-y-5 flex-1",
                    div {
                        div { class: "flex items-center text-emerald-500 mb-2",
                            Icon { d: icons::LEAF, size: 16, class: "mr-2" }
                            span { class: "text-xs font-bold uppercase tracking-wide",
                                "Specifications:"
                            }
                        }
                        ul { class: "text-zinc-300 text-sm space-y-1.5 ml-1 pl-4 border-l-2 border-zinc-800",
                            for spec in product.specs {
                                li { key: "{spec}", "{spec}" }
                            }
                        }
                    }

                    div {
                        div { class: "flex items-center text-emerald-500 mb-2",
                            Icon { d: icons::PACKAGE, size: 16, class: "mr-2" }
                            span { class: "text-xs font-bold uppercase tracking-wide", "Packaging:" }
                        }
                        p { class: "text-zinc-300 text-sm pl-6", "{product.packaging}" }
                    }
                }

                div { class: "mt-6 pt-4 border-t border-zinc-800 mb-6",
                    p { class: "text-zinc-500 text-xs",
                        span { class: "font-semibold text-zinc-400", "MOQ:" }
                        " {product.moq}"
                    }
                }

                div { class: "mt-auto",
                    button {
                        class: "w-full bg-emerald-600 hover:bg-emerald-500 text-white text-sm font-semibold py-3 rounded-lg transition-colors flex items-center justify-center gap-2 group-hover:shadow-lg group-hover:shadow-emerald-900/20",
                        onclick: move |_| on_contact.call(()),
                        "Detail: Contact Us"
                        Icon { d: icons::ARROW_RIGHT, size: 16 }
                    }
                }
            }
        }
    }
}
