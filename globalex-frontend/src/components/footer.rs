use dioxus::prelude::*;

use super::icons::{self, Icon};

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "bg-zinc-950 border-t border-zinc-900 pt-20 pb-10",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-16 mb-16",
                    div { class: "space-y-6",
                        div { class: "flex items-center space-x-3",
                            div { class: "bg-emerald-600 h-10 w-10 flex items-center justify-center rounded-lg",
                                span { class: "text-white font-bold text-base", "GX" }
                            }
                            span { class: "text-xl font-bold text-white tracking-wide", "GLOBAL EX" }
                        }
                        p { class: "text-zinc-500 text-base leading-relaxed",
                            "Premium natural charcoal products from Vietnam's certified forests to ports worldwide."
                        }
                    }

                    div {
                        h4 { class: "font-semibold text-white mb-8 uppercase text-base tracking-wider",
                            "Products"
                        }
                        ul { class: "space-y-5 text-base text-zinc-400",
                            for item in ["White Charcoal", "Black Charcoal", "Briquettes", "Custom Orders"] {
                                li { key: "{item}",
                                    a {
                                        class: "hover:text-emerald-500 transition-colors",
                                        href: "#",
                                        "{item}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h4 { class: "font-semibold text-white mb-8 uppercase text-base tracking-wider",
                            "Contact"
                        }
                        ul { class: "space-y-5 text-base text-zinc-400",
                            li { class: "font-medium text-white", "GLOBAL EX COMPANY LIMITED" }
                            li { class: "flex items-start gap-3",
                                span { "Ha Noi, Vietnam" }
                            }
                            li { class: "flex items-center gap-3",
                                a {
                                    class: "hover:text-white",
                                    href: "mailto:global.ex888@gmail.com",
                                    "global.ex888@gmail.com"
                                }
                            }
                            li { class: "flex items-center gap-3",
                                span { "Mon-Sat: 8AM-6PM" }
                            }
                        }
                    }
                }

                div { class: "pt-10 border-t border-zinc-900 flex flex-col md:flex-row justify-between items-center gap-6",
                    p { class: "text-base text-zinc-600", "© 2024 GLOBAL EX. All rights reserved." }

                    div { class: "flex flex-col md:flex-row items-center gap-6 md:gap-10",
                        div { class: "flex items-center gap-5",
                            a {
                                class: "text-zinc-500 hover:text-blue-500 transition-colors transform hover:scale-110",
                                href: "#",
                                aria_label: "Facebook",
                                Icon { d: icons::FACEBOOK, size: 22 }
                            }
                            a {
                                class: "text-zinc-500 hover:text-pink-500 transition-colors transform hover:scale-110",
                                href: "#",
                                aria_label: "Instagram",
                                Icon { d: icons::INSTAGRAM, size: 22 }
                            }
                            a {
                                class: "text-zinc-500 hover:text-blue-400 transition-colors transform hover:scale-110",
                                href: "#",
                                aria_label: "LinkedIn",
                                Icon { d: icons::LINKEDIN, size: 22 }
                            }
                        }

                        div { class: "flex space-x-8",
                            a { class: "text-zinc-600 hover:text-white transition-colors", href: "#",
                                span { class: "text-sm", "Privacy Policy" }
                            }
                            a { class: "text-zinc-600 hover:text-white transition-colors", href: "#",
                                span { class: "text-sm", "Terms of Service" }
                            }
                        }
                    }
                }
            }
        }
    }
}
