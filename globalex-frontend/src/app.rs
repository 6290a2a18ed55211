use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use globalex_content::section::Section;

use crate::components::{scroll_to_top, About, Blog, Contact, Footer, Hero, Navbar, Products};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Root shell: owns the active section and renders the header, the
/// selected view and the footer around it.
#[component]
pub fn App() -> Element {
    let mut active = use_signal(Section::default);

    // Every section change lands the viewport back at the top.
    use_effect(move || {
        let section = active();
        info!("active section: {:?}", section);
        scroll_to_top(false);
    });

    rsx! {
        link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen flex flex-col bg-zinc-950 font-sans text-slate-200",
            Navbar {
                active: active(),
                on_select: move |section| active.set(section),
            }
            main { class: "flex-grow",
                {match active() {
                    Section::Home => rsx! {
                        Hero { on_cta: move |_| active.set(Section::Products) }
                    },
                    Section::Products => rsx! {
                        Products { on_contact: move |_| active.set(Section::Contact) }
                    },
                    Section::About => rsx! {
                        About {}
                    },
                    Section::Blog => rsx! {
                        Blog {}
                    },
                    Section::Contact => rsx! {
                        Contact {}
                    },
                }}
            }
            Footer {}
        }
    }
}
