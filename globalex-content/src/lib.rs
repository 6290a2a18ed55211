//! Domain model for the Global Ex marketing site.
//!
//! Everything the site renders that is not markup lives here: the section
//! enumeration behind the tab navigation, product and article fixtures,
//! quote-form validation, and the small pieces of pure math behind the
//! landing carousel, the about-page counters, and the dashboard charts.
//! The crate has no browser dependency so all of it is testable on the
//! host.

pub mod articles;
pub mod catalog;
pub mod counter;
pub mod dashboard;
pub mod quote;
pub mod section;
pub mod slider;
