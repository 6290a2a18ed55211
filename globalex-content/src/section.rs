use serde::{Deserialize, Serialize};

/// The five top-level views the root shell can display. Transient UI
/// state only; a reload always lands back on `Home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Products,
    About,
    Blog,
    Contact,
}

impl Section {
    /// Navigation order, left to right.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Products,
        Section::About,
        Section::Blog,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Products => "Products",
            Section::About => "About",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_section_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn nav_order_matches_the_header() {
        let labels: Vec<&str> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Home", "Products", "About", "Blog", "Contact"]);
    }

    #[test]
    fn sections_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&Section::Products).unwrap(),
            "\"products\""
        );
    }
}
