use std::collections::BTreeMap;
use std::fmt;

mod catalog;
mod source;

pub use catalog::{
    TokenCatalog, fixed_dark_tokens, light_fixed_tokens, light_tokens, tokens,
};
pub use source::{LoadedTokenSet, UnmappedKey, UnmappedReason};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    Color,
    Rgb,
    Font,
    FontSize,
    FontWeight,
    LetterSpacing,
    LineHeight,
    Space,
    Radius,
    Transition,
    Easing,
    Duration,
    Shadow,
    ZIndex,
    Breakpoint,
    Opacity,
    Touch,
    Layout,
    Gradient,
    Glow,
    GlowCard,
    GlowLine,
    Utility,
    Focus,
}

impl Category {
    pub const ALL: [Category; 24] = [
        Category::Color,
        Category::Rgb,
        Category::Font,
        Category::FontSize,
        Category::FontWeight,
        Category::LetterSpacing,
        Category::LineHeight,
        Category::Space,
        Category::Radius,
        Category::Transition,
        Category::Easing,
        Category::Duration,
        Category::Shadow,
        Category::ZIndex,
        Category::Breakpoint,
        Category::Opacity,
        Category::Touch,
        Category::Layout,
        Category::Gradient,
        Category::Glow,
        Category::GlowCard,
        Category::GlowLine,
        Category::Utility,
        Category::Focus,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Rgb => "rgb",
            Self::Font => "font",
            Self::FontSize => "fontSize",
            Self::FontWeight => "fontWeight",
            Self::LetterSpacing => "letterSpacing",
            Self::LineHeight => "lineHeight",
            Self::Space => "space",
            Self::Radius => "radius",
            Self::Transition => "transition",
            Self::Easing => "easing",
            Self::Duration => "duration",
            Self::Shadow => "shadow",
            Self::ZIndex => "zIndex",
            Self::Breakpoint => "breakpoint",
            Self::Opacity => "opacity",
            Self::Touch => "touch",
            Self::Layout => "layout",
            Self::Gradient => "gradient",
            Self::Glow => "glow",
            Self::GlowCard => "glowCard",
            Self::GlowLine => "glowLine",
            Self::Utility => "utility",
            Self::Focus => "focus",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! token_keys {
    ($(
        $category:ident => $name:ident {
            $($variant:ident => $key:literal as $css:literal),* $(,)?
        }
    )*) => {
        $(
            #[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
            pub enum $name {
                $($variant,)*
            }

            impl $name {
                pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

                pub const fn as_str(self) -> &'static str {
                    match self {
                        $(Self::$variant => $key,)*
                    }
                }

                pub const fn css_var(self) -> &'static str {
                    match self {
                        $(Self::$variant => $css,)*
                    }
                }

                pub fn from_key(key: &str) -> Option<Self> {
                    match key {
                        $($key => Some(Self::$variant),)*
                        _ => None,
                    }
                }
            }

            impl From<$name> for TokenKey {
                fn from(key: $name) -> Self {
                    TokenKey::$category(key)
                }
            }
        )*

        #[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub enum TokenKey {
            $($category($name),)*
        }

        impl TokenKey {
            pub const fn category(self) -> Category {
                match self {
                    $(Self::$category(_) => Category::$category,)*
                }
            }

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$category(key) => key.as_str(),)*
                }
            }

            pub const fn css_var(self) -> &'static str {
                match self {
                    $(Self::$category(key) => key.css_var(),)*
                }
            }

            pub fn parse(category: Category, key: &str) -> Option<Self> {
                match category {
                    $(Category::$category => $name::from_key(key).map(Self::$category),)*
                }
            }

            pub fn all_in(category: Category) -> Vec<Self> {
                match category {
                    $(Category::$category => $name::ALL.iter().copied().map(Self::$category).collect(),)*
                }
            }
        }
    };
}

token_keys! {
    Color => ColorKey {
        BgDeep => "bgDeep" as "--bg-deep",
        BgBase => "bgBase" as "--bg-base",
        BgSurface => "bgSurface" as "--bg-surface",
        BgElevated => "bgElevated" as "--bg-elevated",
        BgCard => "bgCard" as "--bg-card",
        BgHover => "bgHover" as "--bg-hover",
        BgOverlay => "bgOverlay" as "--bg-overlay",
        BorderSubtle => "borderSubtle" as "--border-subtle",
        BorderDefault => "borderDefault" as "--border-default",
        BorderBright => "borderBright" as "--border-bright",
        TextPrimary => "textPrimary" as "--text-primary",
        TextSecondary => "textSecondary" as "--text-secondary",
        TextMuted => "textMuted" as "--text-muted",
        TextGhost => "textGhost" as "--text-ghost",
        AccentBlue => "accentBlue" as "--accent-primary",
        AccentViolet => "accentViolet" as "--accent-secondary",
        AccentCyan => "accentCyan" as "--accent-tertiary",
        Success => "success" as "--color-success",
        Warning => "warning" as "--color-warning",
        Error => "error" as "--color-error",
        Info => "info" as "--color-info",
    }
    Rgb => RgbKey {
        BgDeep => "bgDeep" as "--bg-deep-rgb",
        White => "white" as "--white-rgb",
        Black => "black" as "--black-rgb",
        AccentBlue => "accentBlue" as "--accent-primary-rgb",
        AccentViolet => "accentViolet" as "--accent-secondary-rgb",
        AccentCyan => "accentCyan" as "--accent-tertiary-rgb",
        Success => "success" as "--success-rgb",
        Warning => "warning" as "--warning-rgb",
        Error => "error" as "--error-rgb",
        Info => "info" as "--info-rgb",
    }
    Font => FontKey {
        Body => "body" as "--font-body",
        Heading => "heading" as "--font-heading",
        Mono => "mono" as "--font-mono",
    }
    FontSize => FontSizeKey {
        Xs => "xs" as "--text-xs",
        Sm => "sm" as "--text-sm",
        Base => "base" as "--text-base",
        Md => "md" as "--text-md",
        Lg => "lg" as "--text-lg",
        Xl => "xl" as "--text-xl",
        Xl2 => "2xl" as "--text-2xl",
        Xl3 => "3xl" as "--text-3xl",
        Xl4 => "4xl" as "--text-4xl",
    }
    FontWeight => FontWeightKey {
        Light => "light" as "--font-light",
        Normal => "normal" as "--font-normal",
        Medium => "medium" as "--font-medium",
        Semibold => "semibold" as "--font-semibold",
        Bold => "bold" as "--font-bold",
    }
    LetterSpacing => LetterSpacingKey {
        Tight => "tight" as "--tracking-tight",
        Normal => "normal" as "--tracking-normal",
        Wide => "wide" as "--tracking-wide",
        Wider => "wider" as "--tracking-wider",
        Widest => "widest" as "--tracking-widest",
    }
    LineHeight => LineHeightKey {
        Tight => "tight" as "--leading-tight",
        Normal => "normal" as "--leading-normal",
        Relaxed => "relaxed" as "--leading-relaxed",
    }
    Space => SpaceKey {
        Xs => "xs" as "--space-xs",
        Sm => "sm" as "--space-sm",
        Md => "md" as "--space-md",
        Lg => "lg" as "--space-lg",
        Xl => "xl" as "--space-xl",
        Xl2 => "2xl" as "--space-2xl",
        Xl3 => "3xl" as "--space-3xl",
        Xl4 => "4xl" as "--space-4xl",
    }
    Radius => RadiusKey {
        Xs => "xs" as "--radius-xs",
        Sm => "sm" as "--radius-sm",
        Md => "md" as "--radius-md",
        Lg => "lg" as "--radius-lg",
        Xl => "xl" as "--radius-xl",
        Full => "full" as "--radius-full",
    }
    Transition => TransitionKey {
        Fast => "fast" as "--transition-fast",
        Base => "base" as "--transition-base",
        Slow => "slow" as "--transition-slow",
    }
    Easing => EasingKey {
        Out => "out" as "--ease-out",
        InOut => "inOut" as "--ease-in-out",
        Spring => "spring" as "--ease-spring",
    }
    Duration => DurationKey {
        Fast => "fast" as "--duration-fast",
        Base => "base" as "--duration-base",
        Slow => "slow" as "--duration-slow",
    }
    Shadow => ShadowKey {
        Sm => "sm" as "--shadow-sm",
        Md => "md" as "--shadow-md",
        Lg => "lg" as "--shadow-lg",
        Xl => "xl" as "--shadow-xl",
        Inset => "inset" as "--shadow-inset",
        Overlay => "overlay" as "--shadow-overlay",
    }
    ZIndex => ZIndexKey {
        Base => "base" as "--z-base",
        Dropdown => "dropdown" as "--z-dropdown",
        Sticky => "sticky" as "--z-sticky",
        Overlay => "overlay" as "--z-overlay",
        Modal => "modal" as "--z-modal",
        Popover => "popover" as "--z-popover",
        Toast => "toast" as "--z-toast",
        Tooltip => "tooltip" as "--z-tooltip",
    }
    Breakpoint => BreakpointKey {
        Sm => "sm" as "--bp-sm",
        Md => "md" as "--bp-md",
        Lg => "lg" as "--bp-lg",
        Xl => "xl" as "--bp-xl",
    }
    Opacity => OpacityKey {
        Disabled => "disabled" as "--opacity-disabled",
        Muted => "muted" as "--opacity-muted",
        Hover => "hover" as "--opacity-hover",
    }
    Touch => TouchKey {
        Min => "min" as "--touch-min",
        Pad => "pad" as "--touch-pad",
        MobileMin => "mobileMin" as "--touch-min",
        MobilePad => "mobilePad" as "--touch-pad",
    }
    Layout => LayoutKey {
        MaxWidth => "maxWidth" as "--layout-max-width",
        Gutter => "gutter" as "--layout-gutter",
        NavHeight => "navHeight" as "--nav-height",
        SidebarWidth => "sidebarWidth" as "--sidebar-width",
    }
    Gradient => GradientKey {
        Primary => "primary" as "--gradient-primary",
        Accent => "accent" as "--gradient-accent",
        Surface => "surface" as "--gradient-surface",
        Text => "text" as "--gradient-text",
        Fade => "fade" as "--gradient-fade",
    }
    Glow => GlowKey {
        Blue => "blue" as "--glow-primary",
        Violet => "violet" as "--glow-secondary",
        Cyan => "cyan" as "--glow-tertiary",
        Soft => "soft" as "--glow-soft",
    }
    GlowCard => GlowCardKey {
        Rest => "rest" as "--glow-card",
        Hover => "hover" as "--glow-card-hover",
    }
    GlowLine => GlowLineKey {
        Horizontal => "horizontal" as "--glow-line",
        Vertical => "vertical" as "--glow-line-vertical",
    }
    Utility => UtilityKey {
        Scrim => "scrim" as "--scrim",
        Selection => "selection" as "--selection-bg",
        Scrollbar => "scrollbar" as "--scrollbar-thumb",
    }
    Focus => FocusKey {
        Ring => "ring" as "--focus-ring",
        Glow => "glow" as "--focus-glow",
    }
}

impl TouchKey {
    /// Touch keys that only apply under `(pointer: coarse)`.
    pub const fn is_coarse_pointer(self) -> bool {
        matches!(self, Self::MobileMin | Self::MobilePad)
    }
}

impl TokenKey {
    pub const fn is_coarse_pointer(self) -> bool {
        match self {
            Self::Touch(key) => key.is_coarse_pointer(),
            _ => false,
        }
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category(), self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for TokenValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for TokenValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenSet {
    tokens: BTreeMap<TokenKey, TokenValue>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<TokenKey>, value: impl Into<TokenValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<TokenKey>, value: impl Into<TokenValue>) {
        self.tokens.insert(key.into(), value.into());
    }

    pub fn get(&self, key: impl Into<TokenKey>) -> Option<&TokenValue> {
        self.tokens.get(&key.into())
    }

    pub fn contains(&self, key: impl Into<TokenKey>) -> bool {
        self.tokens.contains_key(&key.into())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenKey, &TokenValue)> {
        self.tokens.iter().map(|(key, value)| (*key, value))
    }

    pub fn category(&self, category: Category) -> impl Iterator<Item = (TokenKey, &TokenValue)> {
        self.iter().filter(move |(key, _)| key.category() == category)
    }

    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.category(*category).next().is_some())
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for TokenSet
where
    K: Into<TokenKey>,
    V: Into<TokenValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip_through_lookup() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_name("glowBlur"), None);
    }

    #[test]
    fn storage_keys_map_to_renamed_css_variables() {
        assert_eq!(ColorKey::AccentBlue.css_var(), "--accent-primary");
        assert_eq!(ColorKey::BgDeep.css_var(), "--bg-deep");
        assert_eq!(GlowKey::Blue.css_var(), "--glow-primary");
        assert_eq!(FocusKey::Glow.css_var(), "--focus-glow");
        assert_eq!(
            TokenKey::parse(Category::Glow, "blue"),
            Some(TokenKey::Glow(GlowKey::Blue))
        );
        assert_eq!(TokenKey::parse(Category::Glow, "primary"), None);
    }

    #[test]
    fn every_key_parses_back_from_its_storage_name() {
        for category in Category::ALL {
            let keys = TokenKey::all_in(category);
            assert!(!keys.is_empty(), "{category} has no keys");
            for key in keys {
                assert_eq!(key.category(), category);
                assert_eq!(TokenKey::parse(category, key.as_str()), Some(key));
                assert!(key.css_var().starts_with("--"));
            }
        }
    }

    #[test]
    fn only_mobile_touch_keys_are_coarse_pointer() {
        assert!(TokenKey::from(TouchKey::MobileMin).is_coarse_pointer());
        assert!(TokenKey::from(TouchKey::MobilePad).is_coarse_pointer());
        assert!(!TokenKey::from(TouchKey::Min).is_coarse_pointer());
        assert!(!TokenKey::from(ColorKey::BgDeep).is_coarse_pointer());
    }

    #[test]
    fn token_set_iterates_in_declaration_order_not_insertion_order() {
        let set = TokenSet::new()
            .with(ShadowKey::Lg, "0 8px 24px black")
            .with(ColorKey::TextPrimary, "#fff")
            .with(ColorKey::BgDeep, "#000");

        let keys: Vec<_> = set.iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![
                TokenKey::Color(ColorKey::BgDeep),
                TokenKey::Color(ColorKey::TextPrimary),
                TokenKey::Shadow(ShadowKey::Lg),
            ]
        );
        assert_eq!(set.categories(), vec![Category::Color, Category::Shadow]);
    }

    #[test]
    fn values_display_verbatim() {
        assert_eq!(TokenValue::from("rgb(3, 3, 7)").to_string(), "rgb(3, 3, 7)");
        assert_eq!(TokenValue::from(400).to_string(), "400");
        assert_eq!(TokenValue::from(0.4).to_string(), "0.4");
        assert_eq!(TokenValue::from("not a color(").to_string(), "not a color(");
    }
}
