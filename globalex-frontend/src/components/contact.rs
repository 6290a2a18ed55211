//! Contact view: reach-us cards plus the quote request form with
//! client-side validation and a simulated submission round trip.

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use globalex_content::quote::{
    FieldError, QuoteForm, SUBMIT_SIMULATION_MS, SUCCESS_RESET_MS,
};

use super::icons::{self, Icon};

#[component]
pub fn Contact() -> Element {
    let mut form = use_signal(QuoteForm::default);

    let submit = move |event: FormEvent| {
        event.prevent_default();

        if !form.write().submit() {
            return;
        }

        match serde_json::to_string(&form.peek().request) {
            Ok(payload) => info!("quote request submitted: {payload}"),
            Err(err) => warn!("could not serialize quote request: {err}"),
        }

        spawn(async move {
            TimeoutFuture::new(SUBMIT_SIMULATION_MS).await;
            form.write().delivered();

            TimeoutFuture::new(SUCCESS_RESET_MS).await;
            form.write().reset();
        });
    };

    rsx! {
        div { class: "bg-zinc-950 min-h-screen py-20 animate-fade-in",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "text-center mb-16",
                    h2 { class: "text-4xl md:text-5xl font-bold text-white mb-6", "Contact Us" }
                    p { class: "text-zinc-400 max-w-2xl mx-auto text-xl",
                        "Get in touch with our team for quotes, product details, or partnership opportunities."
                    }
                }

                div { class: "grid grid-cols-1 lg:grid-cols-3 gap-10",
                    div { class: "lg:col-span-1 space-y-8",
                        div { class: "bg-zinc-900/50 border border-zinc-800 p-8 rounded-2xl flex items-start space-x-5",
                            div { class: "bg-zinc-800 p-4 rounded-xl text-emerald-500 shrink-0",
                                Icon { d: icons::MAIL, size: 28 }
                            }
                            div {
                                h3 { class: "text-white font-bold text-base mb-2", "Email Us" }
                                p { class: "text-zinc-400 text-base break-all",
                                    "global.ex888@gmail.com"
                                }
                            }
                        }

                        div { class: "bg-zinc-900/50 border border-zinc-800 p-8 rounded-2xl flex items-start space-x-5",
                            div { class: "bg-zinc-800 p-4 rounded-xl text-emerald-500 shrink-0",
                                Icon { d: icons::PHONE, size: 28 }
                            }
                            div {
                                h3 { class: "text-white font-bold text-base mb-2", "Call Us" }
                                p { class: "text-zinc-400 text-base",
                                    "Whatsapp: +84 982485366 (Mr SamSon)"
                                }
                                p { class: "text-zinc-500 text-sm mt-1", "Mon-Sat, 8AM-6PM" }
                            }
                        }

                        div { class: "bg-zinc-900/50 border border-zinc-800 p-8 rounded-2xl flex items-start space-x-5",
                            div { class: "bg-zinc-800 p-4 rounded-xl text-emerald-500 shrink-0",
                                Icon { d: icons::MAP_PIN, size: 28 }
                            }
                            div {
                                h3 { class: "text-white font-bold text-base mb-2", "Visit Us" }
                                p { class: "text-zinc-400 text-base leading-relaxed",
                                    "CÔNG TY TNHH GLOBAL EX Village 7, Bat Trang Commune, Ha Noi City, Viet Nam"
                                }
                            }
                        }
                    }

                    div { class: "lg:col-span-2 bg-zinc-900/30 border border-zinc-800 rounded-2xl p-10",
                        if form().is_success() {
                            div { class: "mb-6 p-4 bg-emerald-500/20 border border-emerald-500/50 rounded-lg text-emerald-400 text-center",
                                "✓ Thank you! Your quote request has been sent. We'll respond within 24 business hours."
                            }
                        }

                        form { class: "space-y-8", onsubmit: submit,
                            div { class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                                QuoteField {
                                    label: "Company Name *",
                                    value: form().request.company_name,
                                    error: form().errors.company_name,
                                    oninput: move |event: FormEvent| {
                                        form.with_mut(|form| {
                                            form.request.company_name = event.value();
                                            form.errors.company_name = None;
                                        });
                                    },
                                }
                                QuoteField {
                                    label: "Contact Person *",
                                    value: form().request.contact_person,
                                    error: form().errors.contact_person,
                                    oninput: move |event: FormEvent| {
                                        form.with_mut(|form| {
                                            form.request.contact_person = event.value();
                                            form.errors.contact_person = None;
                                        });
                                    },
                                }
                            }

                            div { class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                                QuoteField {
                                    label: "Email *",
                                    input_type: "email",
                                    value: form().request.email,
                                    error: form().errors.email,
                                    oninput: move |event: FormEvent| {
                                        form.with_mut(|form| {
                                            form.request.email = event.value();
                                            form.errors.email = None;
                                        });
                                    },
                                }
                                QuoteField {
                                    label: "Phone",
                                    input_type: "tel",
                                    value: form().request.phone,
                                    error: form().errors.phone,
                                    oninput: move |event: FormEvent| {
                                        form.with_mut(|form| {
                                            form.request.phone = event.value();
                                            form.errors.phone = None;
                                        });
                                    },
                                }
                            }

                            QuoteField {
                                label: "Products & Quantity *",
                                placeholder: "e.g., 20 tons Premium Briquettes",
                                value: form().request.products_quantity,
                                error: form().errors.products_quantity,
                                oninput: move |event: FormEvent| {
                                    form.with_mut(|form| {
                                        form.request.products_quantity = event.value();
                                        form.errors.products_quantity = None;
                                    });
                                },
                            }

                            div { class: "space-y-3",
                                label { class: "text-base font-bold text-white", "Destination Port" }
                                input {
                                    r#type: "text",
                                    value: "{form().request.destination_port}",
                                    placeholder: "e.g., Port of Los Angeles",
                                    class: "w-full bg-zinc-950 border border-zinc-800 rounded-lg px-5 py-4 text-white text-base focus:outline-none focus:border-emerald-500 transition-colors placeholder:text-zinc-600",
                                    oninput: move |event: FormEvent| {
                                        form.with_mut(|form| {
                                            form.request.destination_port = event.value();
                                        });
                                    },
                                }
                            }

                            div { class: "space-y-3",
                                label { class: "text-base font-bold text-white",
                                    "Additional Requirements"
                                }
                                textarea {
                                    rows: 4,
                                    value: "{form().request.additional_requirements}",
                                    placeholder: "Tell us about your needs, packaging preferences, delivery timeline, etc.",
                                    class: "w-full bg-zinc-950 border border-zinc-800 rounded-lg px-5 py-4 text-white text-base focus:outline-none focus:border-emerald-500 transition-colors placeholder:text-zinc-600 resize-none",
                                    oninput: move |event: FormEvent| {
                                        form.with_mut(|form| {
                                            form.request.additional_requirements = event.value();
                                        });
                                    },
                                }
                            }

                            button {
                                r#type: "submit",
                                disabled: form().is_submitting(),
                                class: if form().is_submitting() {
                                    "w-full text-white font-bold py-4 rounded-lg transition-all duration-300 shadow-lg flex items-center justify-center gap-3 text-lg bg-zinc-600 cursor-not-allowed"
                                } else {
                                    "w-full text-white font-bold py-4 rounded-lg transition-all duration-300 shadow-lg flex items-center justify-center gap-3 text-lg bg-emerald-600 hover:bg-emerald-500 shadow-emerald-900/20"
                                },
                                if form().is_submitting() {
                                    div { class: "animate-spin rounded-full h-5 w-5 border-b-2 border-white" }
                                    "Sending..."
                                } else {
                                    Icon { d: icons::SEND, size: 20 }
                                    "Send Quote Request"
                                }
                            }

                            p { class: "text-center text-sm text-zinc-500 mt-6",
                                "By submitting this form, you agree to our privacy policy. We'll respond within 24 business hours."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuoteField(
    label: &'static str,
    value: String,
    error: Option<FieldError>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default = "")] placeholder: &'static str,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "space-y-3",
            label { class: "text-base font-bold text-white", "{label}" }
            input {
                r#type: input_type,
                value: "{value}",
                placeholder: "{placeholder}",
                class: if error.is_some() {
                    "w-full bg-zinc-950 border rounded-lg px-5 py-4 text-white text-base focus:outline-none transition-colors placeholder:text-zinc-600 border-red-500 focus:border-red-500"
                } else {
                    "w-full bg-zinc-950 border rounded-lg px-5 py-4 text-white text-base focus:outline-none transition-colors placeholder:text-zinc-600 border-zinc-800 focus:border-emerald-500"
                },
                oninput: move |event| oninput.call(event),
            }
            {error.map(|error| rsx! {
                p { class: "text-red-400 text-sm flex items-center gap-1",
                    Icon { d: icons::ALERT_CIRCLE, size: 14 }
                    "{error}"
                }
            })}
        }
    }
}
