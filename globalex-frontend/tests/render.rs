//! Server-side render checks for views that never touch a browser API
//! during an initial render.

use dioxus::prelude::*;
use globalex_frontend::components::{Blog, Contact, Dashboard, Footer};

#[test]
fn footer_carries_the_company_identity() {
    let html = dioxus_ssr::render_element(rsx! {
        Footer {}
    });
    assert!(html.contains("GLOBAL EX"));
    assert!(html.contains("All rights reserved"));
    assert!(html.contains("global.ex888@gmail.com"));
    assert!(html.contains("Privacy Policy"));
}

#[test]
fn dashboard_renders_stats_and_both_charts() {
    let html = dioxus_ssr::render_element(rsx! {
        Dashboard {}
    });
    assert!(html.contains("Trading Performance"));
    assert!(html.contains("3,450 T"));
    assert!(html.contains("vs last month"));
    assert!(html.contains("Coffee Wood"));
    assert!(html.contains("<svg"));
    assert!(html.contains("export-volume-fill"));
}

#[test]
fn blog_opens_in_list_mode() {
    let html = dioxus_ssr::render_element(rsx! {
        Blog {}
    });
    assert!(html.contains("Blog & Resources"));
    assert!(html.contains("Featured Articles"));
    assert!(html.contains("Recent Articles"));
    assert!(!html.contains("Back to Articles"));
}

#[test]
fn contact_form_starts_idle() {
    let html = dioxus_ssr::render_element(rsx! {
        Contact {}
    });
    assert!(html.contains("Send Quote Request"));
    assert!(!html.contains("Sending..."));
    assert!(!html.contains("Your quote request has been sent"));
}
