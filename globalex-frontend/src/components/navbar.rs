//! Sticky top navigation. Desktop tab row plus a collapsible mobile panel.

use dioxus::prelude::*;

use globalex_content::section::Section;

use super::icons::{self, Icon};

#[component]
pub fn Navbar(active: Section, on_select: EventHandler<Section>) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "sticky top-0 z-50 bg-zinc-950/90 backdrop-blur-md border-b border-zinc-800",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex justify-between h-24",
                    div {
                        class: "flex items-center cursor-pointer",
                        onclick: move |_| on_select.call(Section::Home),
                        div { class: "flex items-center gap-3",
                            div { class: "bg-emerald-600 h-12 w-12 flex items-center justify-center rounded-lg",
                                span { class: "text-white font-bold text-2xl tracking-tighter", "GX" }
                            }
                            span { class: "text-2xl font-bold text-white tracking-wide uppercase",
                                "Global Ex"
                            }
                        }
                    }

                    div { class: "hidden md:flex items-center space-x-10",
                        for section in Section::ALL {
                            button {
                                key: "{section.label()}",
                                class: if active == section {
                                    "text-base font-medium transition-all duration-200 text-emerald-500"
                                } else {
                                    "text-base font-medium transition-all duration-200 text-zinc-400 hover:text-white"
                                },
                                onclick: move |_| on_select.call(section),
                                "{section.label()}"
                            }
                        }
                    }

                    div { class: "flex items-center md:hidden",
                        button {
                            class: "p-2 rounded-md text-zinc-400 hover:text-white hover:bg-zinc-800 focus:outline-none",
                            onclick: move |_| menu_open.toggle(),
                            if menu_open() {
                                Icon { d: icons::X, size: 28 }
                            } else {
                                Icon { d: icons::MENU, size: 28 }
                            }
                        }
                    }
                }
            }

            if menu_open() {
                div { class: "md:hidden bg-zinc-900 border-b border-zinc-800",
                    div { class: "px-2 pt-2 pb-3 space-y-1 sm:px-3",
                        for section in Section::ALL {
                            button {
                                key: "{section.label()}",
                                class: if active == section {
                                    "block w-full text-left px-4 py-4 rounded-md text-lg font-medium text-emerald-500 bg-zinc-800"
                                } else {
                                    "block w-full text-left px-4 py-4 rounded-md text-lg font-medium text-zinc-400 hover:bg-zinc-800 hover:text-white"
                                },
                                onclick: move |_| {
                                    on_select.call(section);
                                    menu_open.set(false);
                                },
                                "{section.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
