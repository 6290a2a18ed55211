//! Stroke icons. One generic component over a table of 24x24 path data,
//! standing in for the icon library the design uses.

use dioxus::prelude::*;

pub const MENU: &str = "M4 6h16 M4 12h16 M4 18h16";
pub const X: &str = "M18 6 6 18 M6 6l12 12";
pub const GLOBE: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Z M2 12h20 M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10Z";
pub const FACTORY: &str = "M2 20h20 M4 20V10l5 4v-4l5 4V8h6v12";
pub const TREES: &str = "M10 10v.2A3 3 0 0 1 8.9 16H5a3 3 0 0 1-1-5.8V10a3 3 0 0 1 6 0Z M7 16v6 M13 19v3 M12 19h8.3a1 1 0 0 0 .7-1.7L18 14h.3a1 1 0 0 0 .7-1.7L16 9h.2a1 1 0 0 0 .8-1.7L13 3l-1.4 1.5";
pub const AWARD: &str = "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14Z M8.2 13.9 7 23l5-3 5 3-1.2-9.1";
pub const LEAF: &str = "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.5 19 2c1 2 2 4.2 2 8 0 5.5-4.8 10-10 10Z M2 21c0-3 1.9-5.4 5.1-6C9.5 14.5 12 13 13 12";
pub const SHIP: &str = "M2 21c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1 M4 18 2 12h20l-2 6 M6 12V7a1 1 0 0 1 1-1h10a1 1 0 0 1 1 1v5 M12 6V3";
pub const PACKAGE: &str = "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z M3.27 6.96 12 12.01l8.73-5.05 M12 22.08V12";
pub const ARROW_RIGHT: &str = "M5 12h14 M12 5l7 7-7 7";
pub const ARROW_LEFT: &str = "M19 12H5 M12 19l-7-7 7-7";
pub const BUILDING: &str = "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z M6 12H4a2 2 0 0 0-2 2v8h4 M18 9h2a2 2 0 0 1 2 2v11h-4 M10 6h4 M10 10h4 M10 14h4 M10 18h4";
pub const USERS: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2 M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8Z M22 21v-2a4 4 0 0 0-3-3.87 M16 3.13a4 4 0 0 1 0 7.75";
pub const TARGET: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Z M12 6a6 6 0 1 0 0 12 6 6 0 0 0 0-12Z M12 10a2 2 0 1 0 0 4 2 2 0 0 0 0-4Z";
pub const HEART: &str = "M19 14c1.5-1.5 3-3.2 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.8 0-3 .5-4.5 2-1.5-1.5-2.7-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4 3 5.5l7 7Z";
pub const CHECK_CIRCLE: &str = "M22 11.08V12a10 10 0 1 1-5.93-9.14 M22 4 12 14.01l-3-3";
pub const CALENDAR: &str = "M8 2v4 M16 2v4 M3 10h18 M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z";
pub const CLOCK: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Z M12 6v6l4 2";
pub const MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z M22 6l-10 7L2 6";
pub const PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.8 19.8 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92Z";
pub const MAP_PIN: &str = "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6Z";
pub const SEND: &str = "M22 2 11 13 M22 2 15 22l-4-9-9-4Z";
pub const ALERT_CIRCLE: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Z M12 8v4 M12 16h.01";
pub const TRENDING_UP: &str = "M22 7 13.5 15.5 8.5 10.5 2 17 M16 7h6v6";
pub const TRENDING_DOWN: &str = "M22 17l-8.5-8.5-5 5L2 7 M16 17h6v-6";
pub const ANCHOR: &str = "M12 8a3 3 0 1 0 0-6 3 3 0 0 0 0 6Z M12 22V8 M5 12H2a10 10 0 0 0 20 0h-3";
pub const DOLLAR_SIGN: &str = "M12 2v20 M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6";
pub const FACEBOOK: &str = "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3Z";
pub const INSTAGRAM: &str = "M17 2H7a5 5 0 0 0-5 5v10a5 5 0 0 0 5 5h10a5 5 0 0 0 5-5V7a5 5 0 0 0-5-5Z M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37Z M17.5 6.5h.01";
pub const LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4V9h4v1.5A6 6 0 0 1 16 8Z M6 9H2v12h4Z M4 6a2 2 0 1 0 0-4 2 2 0 0 0 0 4Z";

#[component]
pub fn Icon(
    d: &'static str,
    #[props(default = 24)] size: u32,
    #[props(default)] class: String,
    #[props(default = 2.0)] stroke_width: f64,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "{d}" }
        }
    }
}
