//! Landing view: auto-advancing hero carousel, company stats, the
//! "why choose us" grid, featured products and the sustainability pitch.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use globalex_content::catalog::FEATURED_PRODUCTS;
use globalex_content::slider::{next_slide, prev_slide, AUTOPLAY_INTERVAL_MS, HERO_SLIDES};

use super::icons::{self, Icon};

struct Feature {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature {
        icon: icons::TREES,
        title: "Natural Wood Sources",
        desc: "100% natural hardwood from responsibly managed forests in Vietnam",
    },
    Feature {
        icon: icons::AWARD,
        title: "Hand-Sorted Quality",
        desc: "Premium grade selection ensuring consistent size, low ash, and high heat output",
    },
    Feature {
        icon: icons::LEAF,
        title: "Eco-Friendly Production",
        desc: "Low-smoke kilns with minimal additives and certified sustainability practices",
    },
    Feature {
        icon: icons::SHIP,
        title: "Global Logistics",
        desc: "Direct export from Vietnamese coastal ports with reliable shipping schedules",
    },
];

#[component]
pub fn Hero(on_cta: EventHandler<()>) -> Element {
    let mut current_slide = use_signal(|| 0usize);

    // Autoplay runs for as long as this view is mounted; the task is
    // cancelled with the component.
    use_future(move || async move {
        if HERO_SLIDES.len() <= 1 {
            return;
        }
        loop {
            TimeoutFuture::new(AUTOPLAY_INTERVAL_MS).await;
            current_slide.with_mut(|slide| *slide = next_slide(*slide, HERO_SLIDES.len()));
        }
    });

    rsx! {
        div { class: "flex flex-col",
            div { class: "relative bg-zinc-950 min-h-[calc(100vh-96px)] flex items-center",
                div { class: "absolute top-0 right-0 -mt-20 -mr-20 w-96 h-96 bg-emerald-900/20 rounded-full blur-3xl opacity-50 pointer-events-none" }
                div { class: "absolute bottom-0 left-0 -mb-20 -ml-20 w-96 h-96 bg-blue-900/20 rounded-full blur-3xl opacity-30 pointer-events-none" }

                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 md:py-28",
                    div { class: "grid grid-cols-1 lg:grid-cols-2 gap-16 items-center",
                        div { class: "space-y-10 animate-fade-in",
                            h1 { class: "text-5xl md:text-6xl lg:text-7xl font-bold tracking-tight text-white leading-tight",
                                "Premium Natural Charcoal"
                            }
                            div { class: "space-y-8 text-xl text-zinc-400 leading-relaxed font-light",
                                p {
                                    "Vietnamese charcoal is valued for its high quality and stable heat output, produced from \
                                     dense hardwoods such as Ko Nia, Eucalyptus, and Coffee wood. This results in long-burning, \
                                     low-smoke, and eco-friendly charcoal."
                                }
                                p {
                                    "With a long, strategically located coastline, Vietnam holds strong advantages in global \
                                     shipping and trade. The country ranks among the top 15 exporters worldwide, with \
                                     charcoal exports reaching about USD 400 million annually."
                                }
                                p {
                                    "Supported by major FTAs and reliable production capacity, Vietnam is increasingly \
                                     recognized as one of Asia's leading and most trusted charcoal suppliers."
                                }
                            }
                        }

                        div { class: "relative h-full flex items-center justify-center",
                            div { class: "group relative w-full aspect-square md:aspect-[4/3] rounded-3xl overflow-hidden shadow-2xl border border-zinc-800 bg-zinc-900",
                                for (index, slide) in HERO_SLIDES.iter().enumerate() {
                                    img {
                                        key: "{slide.image}",
                                        src: "{slide.image}",
                                        alt: "{slide.alt}",
                                        class: if index == current_slide() {
                                            "absolute inset-0 w-full h-full object-cover transition-opacity duration-700 ease-out opacity-100"
                                        } else {
                                            "absolute inset-0 w-full h-full object-cover transition-opacity duration-700 ease-out opacity-0"
                                        },
                                    }
                                }

                                div { class: "absolute inset-0 bg-gradient-to-t from-black/60 via-black/10 to-transparent pointer-events-none" }

                                if HERO_SLIDES.len() > 1 {
                                    button {
                                        r#type: "button",
                                        class: "absolute left-4 top-1/2 -translate-y-1/2 z-20 h-9 w-9 rounded-full bg-black/40 border border-zinc-700 text-zinc-200 flex items-center justify-center hover:bg-black/70 hover:border-emerald-500/60 transition-colors opacity-0 pointer-events-none group-hover:opacity-100 group-hover:pointer-events-auto",
                                        aria_label: "Previous image",
                                        onclick: move |_| {
                                            current_slide
                                                .with_mut(|slide| *slide = prev_slide(*slide, HERO_SLIDES.len()));
                                        },
                                        "‹"
                                    }
                                    button {
                                        r#type: "button",
                                        class: "absolute right-4 top-1/2 -translate-y-1/2 z-20 h-9 w-9 rounded-full bg-black/40 border border-zinc-700 text-zinc-200 flex items-center justify-center hover:bg-black/70 hover:border-emerald-500/60 transition-colors opacity-0 pointer-events-none group-hover:opacity-100 group-hover:pointer-events-auto",
                                        aria_label: "Next image",
                                        onclick: move |_| {
                                            current_slide
                                                .with_mut(|slide| *slide = next_slide(*slide, HERO_SLIDES.len()));
                                        },
                                        "›"
                                    }

                                    div { class: "absolute bottom-4 inset-x-0 flex justify-center gap-2 z-20",
                                        for index in 0..HERO_SLIDES.len() {
                                            button {
                                                key: "{index}",
                                                r#type: "button",
                                                class: if index == current_slide() {
                                                    "h-2.5 rounded-full transition-all duration-300 w-6 bg-emerald-500"
                                                } else {
                                                    "h-2.5 rounded-full transition-all duration-300 w-2.5 bg-zinc-600/70 hover:bg-zinc-300"
                                                },
                                                aria_label: "Go to slide {index + 1}",
                                                onclick: move |_| current_slide.set(index),
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "bg-zinc-900 border-y border-zinc-800 py-20",
                div { class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "flex flex-col md:flex-row justify-center items-center gap-16 md:gap-32 text-center",
                        div { class: "flex flex-col items-center",
                            div { class: "bg-zinc-800/50 p-5 rounded-full mb-6 text-emerald-500",
                                Icon { d: icons::GLOBE, size: 40 }
                            }
                            div { class: "text-5xl font-bold text-white mb-3", "25+" }
                            div { class: "text-zinc-400 text-base uppercase tracking-wider",
                                "Countries Served"
                            }
                        }

                        div { class: "hidden md:block w-px h-24 bg-zinc-800" }

                        div { class: "flex flex-col items-center",
                            div { class: "bg-zinc-800/50 p-5 rounded-full mb-6 text-emerald-500",
                                Icon { d: icons::FACTORY, size: 40 }
                            }
                            div { class: "text-5xl font-bold text-white mb-3", "3" }
                            div { class: "text-zinc-400 text-base uppercase tracking-wider",
                                "Production Facilities"
                            }
                        }
                    }
                }
            }

            div { class: "bg-zinc-950 py-28",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "text-center mb-20",
                        h2 { class: "text-4xl md:text-5xl font-bold text-white mb-6",
                            "Why Choose GLOBAL EX"
                        }
                        p { class: "text-zinc-400 max-w-3xl mx-auto text-xl",
                            "Premium charcoal products backed by sustainable practices and export excellence"
                        }
                    }

                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                        for feature in FEATURES.iter() {
                            div {
                                key: "{feature.title}",
                                class: "bg-zinc-900/50 border border-zinc-800 rounded-2xl p-8 hover:border-emerald-500/30 transition-colors group flex flex-row items-start",
                                div { class: "w-20 h-20 rounded-xl bg-zinc-800 flex shrink-0 items-center justify-center text-emerald-500 mr-8 group-hover:bg-emerald-500/10 transition-colors",
                                    Icon { d: feature.icon, size: 40 }
                                }
                                div {
                                    h3 { class: "text-2xl font-bold text-white mb-4", "{feature.title}" }
                                    p { class: "text-zinc-400 text-base leading-relaxed", "{feature.desc}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "bg-zinc-900/30 py-28",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "text-center mb-20",
                        h2 { class: "text-4xl md:text-5xl font-bold text-white mb-6",
                            "Featured Products"
                        }
                        p { class: "text-zinc-400 max-w-3xl mx-auto text-xl",
                            "Export-grade charcoal products certified for quality and sustainability"
                        }
                    }

                    div { class: "grid grid-cols-1 lg:grid-cols-3 gap-8",
                        for product in FEATURED_PRODUCTS.iter() {
                            div {
                                key: "{product.title}",
                                class: "bg-zinc-900 rounded-3xl border border-zinc-800 overflow-hidden flex flex-col hover:border-emerald-500/50 hover:shadow-2xl hover:shadow-emerald-900/20 hover:scale-[1.02] transition-all duration-300 group",
                                div { class: "w-full h-64 bg-zinc-800/50 flex items-center justify-center relative border-b border-zinc-800 group-hover:bg-zinc-800/70 transition-colors overflow-hidden",
                                    span { class: "absolute top-6 right-6 bg-amber-600/90 text-white text-sm font-bold px-4 py-1.5 rounded-full",
                                        "{product.tag}"
                                    }
                                    img {
                                        src: "{product.image}",
                                        alt: "{product.title}",
                                        class: "w-full h-full object-cover transform group-hover:scale-110 transition-transform duration-500",
                                    }
                                }
                                div { class: "p-8 flex-1 flex flex-col",
                                    h3 { class: "text-2xl font-bold text-white mb-4", "{product.title}" }
                                    p { class: "text-zinc-400 text-base mb-8", "{product.description}" }

                                    div { class: "space-y-6 flex-1",
                                        div {
                                            div { class: "flex items-center text-emerald-500 mb-3",
                                                Icon { d: icons::LEAF, size: 18, class: "mr-2" }
                                                span { class: "text-sm font-bold uppercase tracking-wide",
                                                    "Specifications"
                                                }
                                            }
                                            ul { class: "text-zinc-300 text-sm space-y-2 ml-4 list-disc marker:text-emerald-600",
                                                for spec in product.specs {
                                                    li { key: "{spec}", "{spec}" }
                                                }
                                            }
                                        }

                                        div {
                                            div { class: "flex items-center text-emerald-500 mb-3",
                                                Icon { d: icons::PACKAGE, size: 18, class: "mr-2" }
                                                span { class: "text-sm font-bold uppercase tracking-wide",
                                                    "Packaging"
                                                }
                                            }
                                            p { class: "text-zinc-300 text-sm leading-relaxed",
                                                "{product.packaging}"
                                            }
                                        }
                                    }

                                    div { class: "mt-8 pt-6 border-t border-zinc-800",
                                        p { class: "text-zinc-500 text-sm",
                                            span { class: "font-semibold text-zinc-400", "MOQ:" }
                                            " {product.moq}"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "text-center mt-16",
                        button {
                            class: "inline-flex items-center justify-center px-10 py-4 text-base font-semibold rounded-lg text-emerald-500 border border-emerald-500 hover:bg-emerald-500 hover:text-white transition-all duration-300",
                            onclick: move |_| on_cta.call(()),
                            "View All Products"
                        }
                    }
                }
            }

            div { class: "bg-zinc-950 py-28 relative overflow-hidden",
                div { class: "absolute top-0 left-1/2 -translate-x-1/2 w-full h-full max-w-7xl mx-auto pointer-events-none",
                    div { class: "absolute top-20 left-10 w-64 h-64 bg-emerald-900/10 rounded-full blur-3xl" }
                    div { class: "absolute bottom-20 right-10 w-80 h-80 bg-emerald-900/10 rounded-full blur-3xl" }
                }

                div { class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10",
                    div { class: "text-center mb-16",
                        h2 { class: "text-4xl md:text-5xl font-bold text-white leading-tight mb-6",
                            "Sustainable Charcoal \u{2014} "
                            br { class: "hidden md:block" }
                            span { class: "text-emerald-500",
                                "From Responsible Forests to Your Port"
                            }
                        }
                        div { class: "h-1.5 w-24 bg-emerald-600 mx-auto rounded-full" }
                    }

                    div { class: "text-zinc-300 text-lg md:text-xl leading-relaxed space-y-8 font-light tracking-wide text-justify md:text-left",
                        p {
                            strong { class: "text-white font-semibold", "Vietnam's premium hardwoods" }
                            " \u{2014} such as Ko Nia, Eucalyptus, Coffee wood, \u{2026} \u{2014} create charcoal known for \
                             high heat output, long burn time, low moisture, and clean combustion. At "
                            strong { class: "text-emerald-400 font-semibold", "GLOBAL EX" }
                            ", sustainability is our sales standard. We source stable-quality wood, use \
                             energy-efficient kilns, and apply a zero-waste production process to create \
                             premium charcoal with minimal carbon emissions."
                        }
                        p {
                            "We supply "
                            span { class: "text-white", "Natural black charcoal" }
                            ", "
                            span { class: "text-white", "White charcoal" }
                            ", and "
                            span { class: "text-white", "Sawdust briquettes" }
                            ", all meeting high international market standards. Our products feature low \
                             moisture (\u{2264}2\u{2013}8%), low ash (\u{2264}2\u{2013}8%), calorific value > 6,500 kcal/kg, and \
                             burning time over 4 hours \u{2014} providing strong, consistent heat while reducing \
                             fuel costs. All charcoal is chemical-free and safe for BBQ grilling."
                        }
                        p {
                            strong { class: "text-emerald-400 font-semibold", "GLOBAL EX" }
                            " provides a full set of export documents to ensure smooth customs clearance in \
                             major markets such as Japan, South Korea, the EU, and the Middle East."
                        }
                        p { class: "font-medium text-white/90",
                            "With flexible packaging options (7\u{2013}25 kg, OEM), GLOBAL EX is committed to \
                             delivering sustainable, reliable, and high-quality charcoal to partners worldwide."
                        }
                    }
                }
            }
        }
    }
}
