use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Classes for the outermost page wrapper.
    pub fn shell_class(self) -> &'static str {
        match self {
            Theme::Light => "min-h-screen transition-colors duration-300 bg-white",
            Theme::Dark => "dark min-h-screen transition-colors duration-300 bg-gray-900",
        }
    }

    /// Background of a full-width section. `alt` picks the second shade so
    /// neighbouring sections alternate.
    pub fn section_bg(self, alt: bool) -> &'static str {
        match (self, alt) {
            (Theme::Light, false) => "bg-white",
            (Theme::Light, true) => "bg-gray-50",
            (Theme::Dark, false) => "bg-gray-800",
            (Theme::Dark, true) => "bg-gray-900",
        }
    }

    /// Card surface inside a section.
    pub fn card(self) -> &'static str {
        match self {
            Theme::Light => "bg-white shadow-lg hover:shadow-xl",
            Theme::Dark => "bg-gray-700",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Theme::Light => "text-gray-900",
            Theme::Dark => "text-white",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Theme::Light => "text-gray-600",
            Theme::Dark => "text-gray-300",
        }
    }

    pub fn chip(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-100 text-gray-700",
            Theme::Dark => "bg-gray-600 text-gray-300",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "extra-moon",
            Theme::Dark => "extra-sun",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::default();
        assert_eq!(theme, Theme::Light);
        assert!(theme.toggle().is_dark());
        assert_eq!(theme.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_dark_shell_sets_tailwind_dark_class() {
        assert!(Theme::Dark.shell_class().split_whitespace().any(|c| c == "dark"));
        assert!(!Theme::Light.shell_class().split_whitespace().any(|c| c == "dark"));
    }
}
