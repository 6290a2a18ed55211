//! Company profile: story, animated figures, values, journey timeline,
//! certifications and the office location card.

use dioxus::prelude::*;

use super::counter::AnimatedCounter;
use super::icons::{self, Icon};

struct Value {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

static VALUES: [Value; 4] = [
    Value {
        icon: icons::TARGET,
        title: "Quality First",
        desc: "Every batch is hand-sorted and tested to meet international standards",
    },
    Value {
        icon: icons::HEART,
        title: "Sustainability",
        desc: "Committed to eco-friendly practices from forest to final product",
    },
    Value {
        icon: icons::USERS,
        title: "Customer Focus",
        desc: "Building long-term partnerships through reliable service and support",
    },
    Value {
        icon: icons::GLOBE,
        title: "Global Reach",
        desc: "Serving customers in 25+ countries with consistent quality",
    },
];

struct Milestone {
    year: &'static str,
    event: &'static str,
    target: bool,
}

static MILESTONES: [Milestone; 3] = [
    Milestone {
        year: "2023",
        event: "Company founded in Hanoi",
        target: false,
    },
    Milestone {
        year: "2028",
        event: "Targeting expanded to 10+ export markets",
        target: false,
    },
    Milestone {
        year: "2033",
        event: "Targeting 2000+ tons annual capacity",
        target: true,
    },
];

static CERTIFICATIONS: [&str; 4] = [
    "ISO 9001:2015 Quality Management",
    "SGS Product Certification",
    "FSC Chain of Custody",
    "Export License Vietnam",
];

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "bg-zinc-950 min-h-screen py-20 animate-fade-in",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center mb-24",
                h1 { class: "text-4xl md:text-6xl font-bold text-white mb-6", "About GLOBAL EX" }
                p { class: "text-xl text-zinc-400 max-w-3xl mx-auto",
                    "Premium natural charcoal supplier from Vietnam, trusted by businesses worldwide"
                }
            }

            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 mb-32",
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-16 items-start",
                    div { class: "space-y-8",
                        h2 { class: "text-3xl md:text-4xl font-bold text-white mb-6", "Our Story" }
                        div { class: "text-zinc-400 text-lg space-y-6 leading-relaxed",
                            p {
                                "Founded in 2023, "
                                strong { class: "text-white", "GLOBAL EX COMPANY LIMITED" }
                                " began with a simple mission: to share Vietnam's exceptional natural \
                                 charcoal with the world while protecting our forests and communities."
                            }
                            p {
                                "GLOBAL EX was established with a mission to deliver Vietnam's finest \
                                 natural charcoal to the world through responsible sourcing and modern, \
                                 sustainable production. With many years of experience in growing timber \
                                 trees, The founder built GLOBAL EX on deep market insight, strict quality \
                                 control, and a long-term commitment to global clients."
                            }
                            p {
                                "Supported by Vietnam's strategic export infrastructure and coastal \
                                 logistics, we are proud to contribute to a national charcoal export \
                                 industry valued at over "
                                strong { class: "text-emerald-400", "USD 400 million" }
                                " annually."
                            }
                        }
                    }

                    div { class: "grid grid-cols-1 sm:grid-cols-2 gap-6",
                        StatTile { icon: icons::BUILDING, caption: "2023",
                            "Founded"
                        }
                        StatTile { icon: icons::GLOBE, caption: "Export Markets",
                            AnimatedCounter { end: 25, suffix: "+" }
                        }
                        StatTile { icon: icons::USERS, caption: "Team Members",
                            AnimatedCounter { end: 50, suffix: "+" }
                        }
                        StatTile { icon: icons::AWARD, caption: "Certifications",
                            "ISO & SGS"
                        }
                    }
                }
            }

            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 mb-32",
                h2 { class: "text-3xl md:text-4xl font-bold text-white text-center mb-16",
                    "Our Values"
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8",
                    for value in VALUES.iter() {
                        div {
                            key: "{value.title}",
                            class: "bg-zinc-900/30 border border-zinc-800 p-8 rounded-2xl hover:bg-zinc-900/50 transition-colors",
                            div { class: "p-3 bg-zinc-800/80 w-fit rounded-xl text-emerald-500 mb-6",
                                Icon { d: value.icon }
                            }
                            h3 { class: "text-xl font-bold text-white mb-4", "{value.title}" }
                            p { class: "text-zinc-400 text-sm leading-relaxed", "{value.desc}" }
                        }
                    }
                }
            }

            div { class: "max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 mb-32",
                h2 { class: "text-3xl md:text-4xl font-bold text-white text-center mb-16",
                    "Our Journey"
                }
                div { class: "relative pl-8 md:pl-0",
                    div { class: "absolute left-4 top-0 bottom-0 md:left-1/2 md:-translate-x-1/2 border-l border-emerald-700/40 pointer-events-none" }

                    div { class: "space-y-10",
                        for (index, milestone) in MILESTONES.iter().enumerate() {
                            div {
                                key: "{milestone.year}",
                                class: "relative flex flex-col md:flex-row md:items-center gap-4 md:gap-8 group transition-transform duration-500 ease-out",
                                style: "transition-delay: {index * 120}ms",
                                div { class: "flex items-center md:justify-center md:w-1/3",
                                    div { class: "relative flex items-center",
                                        div {
                                            class: if milestone.target {
                                                "w-4 h-4 rounded-full border-2 shadow-[0_0_0_4px] bg-emerald-400 border-emerald-200 shadow-emerald-400/40 animate-pulse"
                                            } else {
                                                "w-4 h-4 rounded-full border-2 shadow-[0_0_0_4px] bg-emerald-500 border-emerald-300 shadow-emerald-500/20"
                                            },
                                        }
                                        span {
                                            class: if milestone.target {
                                                "ml-4 md:ml-6 font-semibold py-1.5 px-5 rounded-full text-sm tracking-wide shadow-lg shadow-emerald-900/30 group-hover:bg-emerald-600 transition-colors bg-emerald-500 text-black"
                                            } else {
                                                "ml-4 md:ml-6 font-semibold py-1.5 px-5 rounded-full text-sm tracking-wide shadow-lg shadow-emerald-900/30 group-hover:bg-emerald-600 transition-colors bg-emerald-700 text-white"
                                            },
                                            "{milestone.year}"
                                        }
                                    }
                                }

                                div { class: "md:w-2/3",
                                    div {
                                        class: if milestone.target {
                                            "rounded-2xl p-6 md:p-8 text-lg leading-relaxed shadow-lg shadow-black/20 transform transition-all duration-300 group-hover:-translate-y-1 group-hover:shadow-emerald-900/40 bg-gradient-to-r from-emerald-900/60 to-zinc-900 border border-emerald-500/60 text-zinc-100"
                                        } else {
                                            "rounded-2xl p-6 md:p-8 text-lg leading-relaxed shadow-lg shadow-black/20 transform transition-all duration-300 group-hover:-translate-y-1 group-hover:shadow-emerald-900/40 bg-zinc-900 border border-zinc-800 text-zinc-300 group-hover:border-emerald-500/40"
                                        },
                                        if milestone.target {
                                            div { class: "flex items-center gap-2 text-emerald-400 text-sm font-semibold mb-3 uppercase tracking-wide",
                                                Icon { d: icons::TARGET, size: 18 }
                                                span { "Long-term Target" }
                                            }
                                        }
                                        p { "{milestone.event}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 mb-32",
                h2 { class: "text-3xl md:text-4xl font-bold text-white text-center mb-16",
                    "Certifications & Standards"
                }
                div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6",
                    for cert in CERTIFICATIONS {
                        div {
                            key: "{cert}",
                            class: "bg-zinc-900/30 border border-zinc-800 p-8 rounded-xl flex flex-col items-center text-center hover:border-emerald-500/30 transition-colors",
                            Icon {
                                d: icons::CHECK_CIRCLE,
                                size: 40,
                                class: "text-emerald-500 mb-6",
                                stroke_width: 1.5,
                            }
                            p { class: "text-white font-semibold text-sm", "{cert}" }
                        }
                    }
                }
            }

            div { class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8",
                h2 { class: "text-3xl md:text-4xl font-bold text-white text-center mb-10",
                    "Our Location"
                }
                div { class: "bg-zinc-900/50 border border-zinc-800 rounded-2xl p-12 text-center relative overflow-hidden",
                    div { class: "relative z-10",
                        h3 { class: "text-2xl font-bold text-white mb-4", "GLOBAL EX COMPANY LIMITED" }
                        div { class: "flex flex-col items-center justify-center text-zinc-400 space-y-2",
                            p { "Village 7, Bat Trang Commune" }
                            p { "Ha Noi City, Vietnam" }
                        }
                    }
                    div { class: "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-64 h-64 bg-emerald-500/5 rounded-full blur-3xl -z-0" }
                }
            }
        }
    }
}

#[component]
fn StatTile(icon: &'static str, caption: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "bg-zinc-900/50 border border-zinc-800 p-8 rounded-2xl flex flex-col items-center text-center hover:border-emerald-500/30 transition-colors",
            div { class: "p-3 bg-zinc-800 rounded-xl text-emerald-500 mb-4",
                Icon { d: icon }
            }
            h3 { class: "text-2xl font-bold text-white mb-1", {children} }
            p { class: "text-zinc-500 text-sm", "{caption}" }
        }
    }
}
