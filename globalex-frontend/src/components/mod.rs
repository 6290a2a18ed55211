pub mod about;
pub mod blog;
pub mod contact;
pub mod counter;
pub mod dashboard;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod products;

pub use about::About;
pub use blog::Blog;
pub use contact::Contact;
pub use dashboard::Dashboard;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use products::Products;

use web_sys::{ScrollBehavior, ScrollToOptions};

/// Scrolls the window back to the top, optionally with smooth scrolling.
pub fn scroll_to_top(smooth: bool) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        window.scroll_to_with_scroll_to_options(&options);
    }
}
