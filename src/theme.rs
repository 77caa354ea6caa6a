#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Values accepted by the `data-theme` attribute on the document root.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThemeAttribute {
    Light,
    Dark,
    Auto,
}

impl ThemeAttribute {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    pub fn selector(self) -> String {
        format!("[data-theme=\"{}\"]", self.as_str())
    }
}

pub const FIXED_REGION_CLASS: &str = "theme-fixed";

pub fn fixed_region_selector() -> String {
    format!(".{FIXED_REGION_CLASS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_switching_uses_attribute_selectors() {
        assert_eq!(ThemeAttribute::Light.selector(), "[data-theme=\"light\"]");
        assert_eq!(ThemeAttribute::Auto.selector(), "[data-theme=\"auto\"]");
        assert_eq!(ThemeAttribute::Dark.selector(), "[data-theme=\"dark\"]");
    }

    #[test]
    fn fixed_region_is_a_class() {
        assert_eq!(fixed_region_selector(), ".theme-fixed");
        assert_eq!(ColorScheme::Dark.as_str(), "dark");
    }
}
