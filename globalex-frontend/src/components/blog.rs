//! Blog view: featured and recent article tiers plus a full-article
//! detail mode with a back control.

use dioxus::prelude::*;

use globalex_content::articles::{
    featured_articles, recent_articles, Article, BlogSelection, ContentBlock,
};

use super::icons::{self, Icon};
use super::scroll_to_top;

#[component]
pub fn Blog() -> Element {
    let mut selection = use_signal(BlogSelection::default);

    if let Some(article) = selection().article() {
        return rsx! {
            div { class: "bg-zinc-950 min-h-screen py-16 animate-fade-in",
                div { class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8",
                    button {
                        class: "flex items-center text-zinc-400 hover:text-emerald-500 transition-colors mb-8 group",
                        onclick: move |_| selection.with_mut(|selection| selection.back()),
                        Icon {
                            d: icons::ARROW_LEFT,
                            size: 20,
                            class: "mr-2 group-hover:-translate-x-1 transition-transform",
                        }
                        "Back to Articles"
                    }

                    article { class: "bg-zinc-900 border border-zinc-800 rounded-3xl overflow-hidden",
                        div { class: "w-full h-80 relative",
                            img {
                                src: "{article.image}",
                                alt: "{article.title}",
                                class: "w-full h-full object-cover",
                            }
                            div { class: "absolute inset-0 bg-gradient-to-t from-zinc-900 to-transparent" }
                        }

                        div { class: "p-8 md:p-12 -mt-20 relative",
                            div { class: "mb-10 border-b border-zinc-800 pb-10",
                                div { class: "flex flex-wrap gap-4 mb-6",
                                    span { class: "bg-emerald-500/10 text-emerald-500 border border-emerald-500/20 px-4 py-1.5 rounded-full text-sm font-medium backdrop-blur-sm",
                                        "{article.category}"
                                    }
                                    div { class: "flex items-center text-zinc-300 text-sm backdrop-blur-sm bg-black/20 px-3 py-1 rounded-full",
                                        Icon { d: icons::CALENDAR, size: 16, class: "mr-2" }
                                        "{article.date}"
                                    }
                                    div { class: "flex items-center text-zinc-300 text-sm backdrop-blur-sm bg-black/20 px-3 py-1 rounded-full",
                                        Icon { d: icons::CLOCK, size: 16, class: "mr-2" }
                                        "{article.read_time} read"
                                    }
                                }

                                h1 { class: "text-3xl md:text-5xl font-bold text-white leading-tight mb-6",
                                    "{article.title}"
                                }

                                p { class: "text-xl text-zinc-400 leading-relaxed font-light",
                                    "{article.summary}"
                                }
                            }

                            div { class: "prose prose-invert prose-emerald max-w-none",
                                for (index, block) in article.body.iter().enumerate() {
                                    ArticleBlock { key: "{index}", block }
                                }
                            }
                        }
                    }
                }
            }
        };
    }

    rsx! {
        div { class: "bg-zinc-950 min-h-screen py-20 animate-fade-in",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center mb-20",
                h1 { class: "text-4xl md:text-5xl font-bold text-white mb-4", "Blog & Resources" }
                p { class: "text-xl text-zinc-400 max-w-3xl mx-auto",
                    "Industry insights, product guides, and sustainability stories from the charcoal trade"
                }
            }

            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 mb-20",
                h2 { class: "text-2xl md:text-3xl font-bold text-white mb-8", "Featured Articles" }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                    for article in featured_articles() {
                        ArticleCard {
                            key: "{article.id}",
                            article,
                            large: true,
                            on_open: move |article: &'static Article| {
                                selection.with_mut(|selection| selection.open(article.id));
                                scroll_to_top(true);
                            },
                        }
                    }
                }
            }

            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 mb-20",
                h2 { class: "text-2xl md:text-3xl font-bold text-white mb-8", "Recent Articles" }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for article in recent_articles() {
                        ArticleCard {
                            key: "{article.id}",
                            article,
                            large: false,
                            on_open: move |article: &'static Article| {
                                selection.with_mut(|selection| selection.open(article.id));
                                scroll_to_top(true);
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ArticleCard(
    article: &'static Article,
    #[props(default)] large: bool,
    on_open: EventHandler<&'static Article>,
) -> Element {
    rsx! {
        div {
            class: "group bg-zinc-900 border border-zinc-800 rounded-2xl overflow-hidden hover:border-emerald-500/30 transition-all duration-300 flex flex-col h-full cursor-pointer",
            onclick: move |_| on_open.call(article),
            div {
                class: if large {
                    "w-full relative overflow-hidden border-b border-zinc-800 h-64"
                } else {
                    "w-full relative overflow-hidden border-b border-zinc-800 h-48"
                },
                img {
                    src: "{article.image}",
                    alt: "{article.title}",
                    class: "w-full h-full object-cover transform group-hover:scale-105 transition-transform duration-700",
                }
                if article.featured {
                    span { class: "absolute top-4 right-4 bg-amber-600/90 text-white text-xs font-bold px-3 py-1 rounded-full shadow-lg z-10",
                        "Featured"
                    }
                }
                div { class: "absolute inset-0 bg-black/20 group-hover:bg-transparent transition-colors duration-500" }
            }

            div { class: "p-8 flex flex-col flex-grow",
                div { class: "mb-4",
                    span { class: "inline-block px-3 py-1 rounded-full text-xs font-medium text-zinc-300 border border-zinc-700 bg-zinc-800/50",
                        "{article.category}"
                    }
                }

                h3 {
                    class: if large {
                        "font-bold text-white mb-4 group-hover:text-emerald-500 transition-colors text-2xl"
                    } else {
                        "font-bold text-white mb-4 group-hover:text-emerald-500 transition-colors text-xl"
                    },
                    "{article.title}"
                }

                p { class: "text-zinc-400 text-sm leading-relaxed mb-6 flex-grow line-clamp-3",
                    "{article.summary}"
                }

                div { class: "flex items-center justify-between pt-6 border-t border-zinc-800 mt-auto",
                    div { class: "flex items-center space-x-4 text-xs text-zinc-500",
                        div { class: "flex items-center",
                            Icon { d: icons::CALENDAR, size: 14, class: "mr-1.5" }
                            "{article.date}"
                        }
                        div { class: "flex items-center",
                            Icon { d: icons::CLOCK, size: 14, class: "mr-1.5" }
                            "{article.read_time}"
                        }
                    }

                    button { class: "flex items-center text-emerald-500 text-sm font-medium group-hover:translate-x-1 transition-transform",
                        "Read More"
                        Icon { d: icons::ARROW_RIGHT, size: 16, class: "ml-1" }
                    }
                }
            }
        }
    }
}

#[component]
fn ArticleBlock(block: &'static ContentBlock) -> Element {
    match block {
        ContentBlock::Paragraph(text) => rsx! {
            p { class: "mb-6 text-zinc-300 leading-relaxed", "{text}" }
        },
        ContentBlock::Heading(text) => rsx! {
            h3 { class: "text-2xl font-bold text-white mb-4 mt-8", "{text}" }
        },
        ContentBlock::Bullets(items) => rsx! {
            ul { class: "list-disc ml-5 text-zinc-300 space-y-2 mb-6",
                for item in *items {
                    li { key: "{item}", "{item}" }
                }
            }
        },
        ContentBlock::Feature {
            title,
            intro,
            points,
            note,
            muted,
        } => rsx! {
            div {
                class: if *muted {
                    "border-l-4 border-zinc-700 pl-6 my-8"
                } else {
                    "border-l-4 border-emerald-500 pl-6 my-8"
                },
                h3 { class: "text-xl font-bold text-white mb-2", "{title}" }
                p { class: "mb-3 text-zinc-300", "{intro}" }
                ul { class: "list-disc ml-5 text-zinc-300 space-y-1",
                    for point in *points {
                        li { key: "{point}", "{point}" }
                    }
                }
                p { class: "mt-3 text-zinc-400 text-sm italic", "{note}" }
            }
        },
        ContentBlock::Callout { title, body } => rsx! {
            div { class: "bg-zinc-800/50 p-6 rounded-xl border-l-4 border-emerald-500 my-8",
                h4 { class: "text-lg font-bold text-white mb-2", "{title}" }
                p { class: "text-zinc-400 text-sm", "{body}" }
            }
        },
        ContentBlock::Image { src, alt } => rsx! {
            img {
                src: "{src}",
                alt: "{alt}",
                class: "w-full h-64 md:h-80 object-cover rounded-xl mb-8 border border-zinc-800",
            }
        },
    }
}
