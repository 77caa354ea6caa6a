use super::{
    BreakpointKey, ColorKey, DurationKey, EasingKey, FocusKey, FontKey, FontSizeKey,
    FontWeightKey, GlowCardKey, GlowKey, GlowLineKey, GradientKey, LayoutKey, LetterSpacingKey,
    LineHeightKey, OpacityKey, RadiusKey, RgbKey, ShadowKey, SpaceKey, TokenSet, TouchKey,
    TransitionKey, UtilityKey, ZIndexKey,
};

#[derive(Clone, Debug, PartialEq)]
pub struct TokenCatalog {
    pub base: TokenSet,
    pub light: TokenSet,
    pub fixed_dark: TokenSet,
    pub light_fixed: TokenSet,
}

impl Default for TokenCatalog {
    fn default() -> Self {
        Self {
            base: tokens(),
            light: light_tokens(),
            fixed_dark: fixed_dark_tokens(),
            light_fixed: light_fixed_tokens(),
        }
    }
}

impl TokenCatalog {
    pub fn new(base: TokenSet) -> Self {
        Self {
            base,
            light: TokenSet::new(),
            fixed_dark: TokenSet::new(),
            light_fixed: TokenSet::new(),
        }
    }

    pub fn with_light(mut self, light: TokenSet) -> Self {
        self.light = light;
        self
    }

    pub fn with_fixed_dark(mut self, fixed_dark: TokenSet) -> Self {
        self.fixed_dark = fixed_dark;
        self
    }

    pub fn with_light_fixed(mut self, light_fixed: TokenSet) -> Self {
        self.light_fixed = light_fixed;
        self
    }
}

pub fn tokens() -> TokenSet {
    TokenSet::new()
        .with(ColorKey::BgDeep, "rgb(3, 3, 7)")
        .with(ColorKey::BgBase, "rgb(8, 8, 14)")
        .with(ColorKey::BgSurface, "rgb(13, 13, 22)")
        .with(ColorKey::BgElevated, "rgb(19, 19, 31)")
        .with(ColorKey::BgCard, "rgba(255, 255, 255, 0.03)")
        .with(ColorKey::BgHover, "rgba(255, 255, 255, 0.06)")
        .with(ColorKey::BgOverlay, "rgba(var(--bg-deep-rgb), 0.8)")
        .with(ColorKey::BorderSubtle, "rgba(255, 255, 255, 0.06)")
        .with(ColorKey::BorderDefault, "rgba(255, 255, 255, 0.1)")
        .with(ColorKey::BorderBright, "rgba(255, 255, 255, 0.18)")
        .with(ColorKey::TextPrimary, "rgb(232, 232, 240)")
        .with(ColorKey::TextSecondary, "rgb(161, 161, 181)")
        .with(ColorKey::TextMuted, "rgb(107, 107, 128)")
        .with(ColorKey::TextGhost, "rgb(66, 66, 84)")
        .with(ColorKey::AccentBlue, "rgb(77, 124, 254)")
        .with(ColorKey::AccentViolet, "rgb(139, 92, 246)")
        .with(ColorKey::AccentCyan, "rgb(34, 211, 238)")
        .with(ColorKey::Success, "rgb(34, 197, 94)")
        .with(ColorKey::Warning, "rgb(234, 179, 8)")
        .with(ColorKey::Error, "rgb(239, 68, 68)")
        .with(ColorKey::Info, "rgb(56, 189, 248)")
        .with(RgbKey::BgDeep, "3, 3, 7")
        .with(RgbKey::White, "255, 255, 255")
        .with(RgbKey::Black, "0, 0, 0")
        .with(RgbKey::AccentBlue, "77, 124, 254")
        .with(RgbKey::AccentViolet, "139, 92, 246")
        .with(RgbKey::AccentCyan, "34, 211, 238")
        .with(RgbKey::Success, "34, 197, 94")
        .with(RgbKey::Warning, "234, 179, 8")
        .with(RgbKey::Error, "239, 68, 68")
        .with(RgbKey::Info, "56, 189, 248")
        .with(
            FontKey::Body,
            "'Host Grotesk', system-ui, -apple-system, sans-serif",
        )
        .with(
            FontKey::Heading,
            "'Tektur', 'Host Grotesk', system-ui, sans-serif",
        )
        .with(
            FontKey::Mono,
            "'JetBrains Mono', ui-monospace, SFMono-Regular, monospace",
        )
        .with(FontSizeKey::Xs, "11px")
        .with(FontSizeKey::Sm, "13px")
        .with(FontSizeKey::Base, "14px")
        .with(FontSizeKey::Md, "15px")
        .with(FontSizeKey::Lg, "18px")
        .with(FontSizeKey::Xl, "22px")
        .with(FontSizeKey::Xl2, "28px")
        .with(FontSizeKey::Xl3, "36px")
        .with(FontSizeKey::Xl4, "48px")
        .with(FontWeightKey::Light, 300)
        .with(FontWeightKey::Normal, 400)
        .with(FontWeightKey::Medium, 500)
        .with(FontWeightKey::Semibold, 600)
        .with(FontWeightKey::Bold, 700)
        .with(LetterSpacingKey::Tight, "-0.02em")
        .with(LetterSpacingKey::Normal, "0")
        .with(LetterSpacingKey::Wide, "0.5px")
        .with(LetterSpacingKey::Wider, "1px")
        .with(LetterSpacingKey::Widest, "2px")
        .with(LineHeightKey::Tight, 1.2)
        .with(LineHeightKey::Normal, 1.5)
        .with(LineHeightKey::Relaxed, 1.7)
        .with(SpaceKey::Xs, "4px")
        .with(SpaceKey::Sm, "8px")
        .with(SpaceKey::Md, "12px")
        .with(SpaceKey::Lg, "16px")
        .with(SpaceKey::Xl, "24px")
        .with(SpaceKey::Xl2, "32px")
        .with(SpaceKey::Xl3, "48px")
        .with(SpaceKey::Xl4, "64px")
        .with(RadiusKey::Xs, "2px")
        .with(RadiusKey::Sm, "4px")
        .with(RadiusKey::Md, "8px")
        .with(RadiusKey::Lg, "12px")
        .with(RadiusKey::Xl, "16px")
        .with(RadiusKey::Full, "9999px")
        .with(
            TransitionKey::Fast,
            "all var(--duration-fast) var(--ease-out)",
        )
        .with(
            TransitionKey::Base,
            "all var(--duration-base) var(--ease-out)",
        )
        .with(
            TransitionKey::Slow,
            "all var(--duration-slow) var(--ease-in-out)",
        )
        .with(EasingKey::Out, "cubic-bezier(0.16, 1, 0.3, 1)")
        .with(EasingKey::InOut, "cubic-bezier(0.65, 0, 0.35, 1)")
        .with(EasingKey::Spring, "cubic-bezier(0.34, 1.56, 0.64, 1)")
        .with(DurationKey::Fast, "150ms")
        .with(DurationKey::Base, "250ms")
        .with(DurationKey::Slow, "400ms")
        .with(ShadowKey::Sm, "0 1px 2px rgba(var(--black-rgb), 0.4)")
        .with(
            ShadowKey::Md,
            "0 4px 12px rgba(var(--black-rgb), 0.5), 0 1px 3px rgba(var(--black-rgb), 0.3)",
        )
        .with(
            ShadowKey::Lg,
            "0 12px 32px rgba(var(--black-rgb), 0.55), 0 2px 6px rgba(var(--black-rgb), 0.35)",
        )
        .with(
            ShadowKey::Xl,
            "0 24px 64px rgba(var(--black-rgb), 0.6), 0 4px 12px rgba(var(--black-rgb), 0.4)",
        )
        .with(
            ShadowKey::Inset,
            "inset 0 1px 0 rgba(var(--white-rgb), 0.04)",
        )
        .with(
            ShadowKey::Overlay,
            "0 32px 96px rgba(var(--black-rgb), 0.7), 0 0 0 1px var(--border-subtle)",
        )
        .with(ZIndexKey::Base, 0)
        .with(ZIndexKey::Dropdown, 100)
        .with(ZIndexKey::Sticky, 200)
        .with(ZIndexKey::Overlay, 300)
        .with(ZIndexKey::Modal, 400)
        .with(ZIndexKey::Popover, 500)
        .with(ZIndexKey::Toast, 600)
        .with(ZIndexKey::Tooltip, 700)
        .with(BreakpointKey::Sm, "640px")
        .with(BreakpointKey::Md, "768px")
        .with(BreakpointKey::Lg, "1024px")
        .with(BreakpointKey::Xl, "1280px")
        .with(OpacityKey::Disabled, 0.4)
        .with(OpacityKey::Muted, 0.6)
        .with(OpacityKey::Hover, 0.8)
        .with(TouchKey::Min, "32px")
        .with(TouchKey::Pad, "8px")
        .with(TouchKey::MobileMin, "44px")
        .with(TouchKey::MobilePad, "12px")
        .with(LayoutKey::MaxWidth, "1200px")
        .with(LayoutKey::Gutter, "var(--space-xl)")
        .with(LayoutKey::NavHeight, "64px")
        .with(LayoutKey::SidebarWidth, "260px")
        .with(
            GradientKey::Primary,
            "linear-gradient(135deg, var(--accent-primary), var(--accent-secondary))",
        )
        .with(
            GradientKey::Accent,
            "linear-gradient(135deg, var(--accent-secondary), var(--accent-tertiary))",
        )
        .with(
            GradientKey::Surface,
            "linear-gradient(180deg, rgba(var(--white-rgb), 0.03), rgba(var(--white-rgb), 0))",
        )
        .with(
            GradientKey::Text,
            "linear-gradient(90deg, var(--text-primary), var(--accent-primary))",
        )
        .with(
            GradientKey::Fade,
            "linear-gradient(180deg, transparent, var(--bg-deep))",
        )
        .with(
            GlowKey::Blue,
            "0 0 24px rgba(var(--accent-primary-rgb), 0.35)",
        )
        .with(
            GlowKey::Violet,
            "0 0 24px rgba(var(--accent-secondary-rgb), 0.35)",
        )
        .with(
            GlowKey::Cyan,
            "0 0 24px rgba(var(--accent-tertiary-rgb), 0.3)",
        )
        .with(
            GlowKey::Soft,
            "0 0 48px rgba(var(--accent-primary-rgb), 0.12)",
        )
        .with(
            GlowCardKey::Rest,
            "0 0 0 1px var(--border-subtle), 0 4px 24px rgba(var(--black-rgb), 0.4)",
        )
        .with(
            GlowCardKey::Hover,
            "0 0 0 1px rgba(var(--accent-primary-rgb), 0.3), 0 8px 32px rgba(var(--accent-primary-rgb), 0.15)",
        )
        .with(
            GlowLineKey::Horizontal,
            "linear-gradient(90deg, transparent, rgba(var(--accent-primary-rgb), 0.6), transparent)",
        )
        .with(
            GlowLineKey::Vertical,
            "linear-gradient(180deg, transparent, rgba(var(--accent-primary-rgb), 0.6), transparent)",
        )
        .with(UtilityKey::Scrim, "rgba(var(--black-rgb), 0.6)")
        .with(UtilityKey::Selection, "rgba(var(--accent-primary-rgb), 0.3)")
        .with(UtilityKey::Scrollbar, "rgba(var(--white-rgb), 0.12)")
        .with(FocusKey::Ring, "0 0 0 2px var(--accent-primary)")
        .with(
            FocusKey::Glow,
            "0 0 0 2px var(--bg-deep), 0 0 0 4px rgba(var(--accent-primary-rgb), 0.6)",
        )
}

pub fn light_tokens() -> TokenSet {
    TokenSet::new()
        .with(ColorKey::BgDeep, "rgb(242, 242, 248)")
        .with(ColorKey::BgBase, "rgb(247, 247, 251)")
        .with(ColorKey::BgSurface, "rgb(255, 255, 255)")
        .with(ColorKey::BgElevated, "rgb(255, 255, 255)")
        .with(ColorKey::BgCard, "rgba(0, 0, 0, 0.02)")
        .with(ColorKey::BgHover, "rgba(0, 0, 0, 0.04)")
        .with(ColorKey::BorderSubtle, "rgba(0, 0, 0, 0.06)")
        .with(ColorKey::BorderDefault, "rgba(0, 0, 0, 0.1)")
        .with(ColorKey::BorderBright, "rgba(0, 0, 0, 0.18)")
        .with(ColorKey::TextPrimary, "rgb(17, 17, 28)")
        .with(ColorKey::TextSecondary, "rgb(74, 74, 96)")
        .with(ColorKey::TextMuted, "rgb(112, 112, 134)")
        .with(ColorKey::TextGhost, "rgb(168, 168, 186)")
        .with(ColorKey::AccentBlue, "rgb(45, 91, 227)")
        .with(ColorKey::AccentViolet, "rgb(114, 64, 220)")
        .with(ColorKey::AccentCyan, "rgb(8, 145, 178)")
        .with(RgbKey::BgDeep, "242, 242, 248")
        .with(RgbKey::AccentBlue, "45, 91, 227")
        .with(RgbKey::AccentViolet, "114, 64, 220")
        .with(RgbKey::AccentCyan, "8, 145, 178")
        .with(ShadowKey::Sm, "0 1px 2px rgba(var(--black-rgb), 0.06)")
        .with(
            ShadowKey::Md,
            "0 4px 12px rgba(var(--black-rgb), 0.08), 0 1px 3px rgba(var(--black-rgb), 0.06)",
        )
        .with(
            ShadowKey::Lg,
            "0 12px 32px rgba(var(--black-rgb), 0.1), 0 2px 6px rgba(var(--black-rgb), 0.06)",
        )
        .with(
            ShadowKey::Xl,
            "0 24px 64px rgba(var(--black-rgb), 0.12), 0 4px 12px rgba(var(--black-rgb), 0.08)",
        )
        .with(ShadowKey::Inset, "inset 0 1px 0 rgba(var(--white-rgb), 0.6)")
        .with(
            GradientKey::Surface,
            "linear-gradient(180deg, rgba(var(--white-rgb), 0.9), rgba(var(--white-rgb), 0.6))",
        )
        .with(
            GlowKey::Blue,
            "0 0 16px rgba(var(--accent-primary-rgb), 0.18)",
        )
        .with(
            GlowKey::Violet,
            "0 0 16px rgba(var(--accent-secondary-rgb), 0.18)",
        )
        .with(
            GlowKey::Cyan,
            "0 0 16px rgba(var(--accent-tertiary-rgb), 0.16)",
        )
        .with(GlowKey::Soft, "none")
        .with(
            GlowCardKey::Rest,
            "0 0 0 1px var(--border-subtle), 0 2px 12px rgba(var(--black-rgb), 0.06)",
        )
        .with(
            GlowCardKey::Hover,
            "0 0 0 1px rgba(var(--accent-primary-rgb), 0.25), 0 6px 24px rgba(var(--accent-primary-rgb), 0.1)",
        )
        .with(
            GlowLineKey::Horizontal,
            "linear-gradient(90deg, transparent, rgba(var(--accent-primary-rgb), 0.35), transparent)",
        )
        .with(
            GlowLineKey::Vertical,
            "linear-gradient(180deg, transparent, rgba(var(--accent-primary-rgb), 0.35), transparent)",
        )
        .with(UtilityKey::Scrim, "rgba(var(--black-rgb), 0.3)")
        .with(UtilityKey::Selection, "rgba(var(--accent-primary-rgb), 0.2)")
        .with(UtilityKey::Scrollbar, "rgba(var(--black-rgb), 0.15)")
}

/// Chrome regions (nav, footer) that stay dark whatever the page theme.
pub fn fixed_dark_tokens() -> TokenSet {
    TokenSet::new()
        .with(ColorKey::BgSurface, "rgb(13, 13, 22)")
        .with(ColorKey::BgHover, "rgba(255, 255, 255, 0.06)")
        .with(ColorKey::BorderSubtle, "rgba(255, 255, 255, 0.06)")
        .with(ColorKey::BorderDefault, "rgba(255, 255, 255, 0.1)")
        .with(ColorKey::TextPrimary, "rgb(232, 232, 240)")
        .with(ColorKey::TextSecondary, "rgb(161, 161, 181)")
        .with(ColorKey::TextMuted, "rgb(107, 107, 128)")
        .with(ColorKey::AccentBlue, "rgb(77, 124, 254)")
        .with(RgbKey::AccentBlue, "77, 124, 254")
        .with(
            GlowKey::Blue,
            "0 0 24px rgba(var(--accent-primary-rgb), 0.35)",
        )
        .with(
            GlowLineKey::Horizontal,
            "linear-gradient(90deg, transparent, rgba(var(--accent-primary-rgb), 0.6), transparent)",
        )
}

/// Chrome regions in light mode: a dark-blue band instead of the page's light surface.
pub fn light_fixed_tokens() -> TokenSet {
    TokenSet::new()
        .with(ColorKey::BgSurface, "rgb(18, 27, 56)")
        .with(ColorKey::BgHover, "rgba(255, 255, 255, 0.08)")
        .with(ColorKey::BorderSubtle, "rgba(255, 255, 255, 0.1)")
        .with(ColorKey::BorderDefault, "rgba(255, 255, 255, 0.16)")
        .with(ColorKey::TextPrimary, "rgb(240, 243, 255)")
        .with(ColorKey::TextSecondary, "rgb(184, 194, 230)")
        .with(ColorKey::TextMuted, "rgb(134, 146, 196)")
        .with(ColorKey::AccentBlue, "rgb(122, 160, 255)")
        .with(RgbKey::AccentBlue, "122, 160, 255")
        .with(
            GlowKey::Blue,
            "0 0 20px rgba(var(--accent-primary-rgb), 0.3)",
        )
        .with(
            GlowLineKey::Horizontal,
            "linear-gradient(90deg, transparent, rgba(var(--accent-primary-rgb), 0.5), transparent)",
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{Category, TokenKey};

    #[test]
    fn base_set_defines_every_key() {
        let base = tokens();
        for category in Category::ALL {
            for key in TokenKey::all_in(category) {
                assert!(base.contains(key), "base set is missing {key}");
            }
        }
    }

    #[test]
    fn override_sets_are_partial() {
        let base = tokens();
        for set in [light_tokens(), fixed_dark_tokens(), light_fixed_tokens()] {
            assert!(!set.is_empty());
            assert!(set.len() < base.len());
        }
    }

    #[test]
    fn light_theme_overrides_bg_deep() {
        assert_eq!(
            tokens().get(ColorKey::BgDeep).map(ToString::to_string),
            Some("rgb(3, 3, 7)".to_string())
        );
        assert_eq!(
            light_tokens().get(ColorKey::BgDeep).map(ToString::to_string),
            Some("rgb(242, 242, 248)".to_string())
        );
    }

    #[test]
    fn fixed_regions_never_pin_the_page_background() {
        assert!(!fixed_dark_tokens().contains(ColorKey::BgDeep));
        assert!(!light_fixed_tokens().contains(ColorKey::BgDeep));
    }

    #[test]
    fn rgb_tokens_are_numeric_triples() {
        let catalog = TokenCatalog::default();
        for set in [&catalog.base, &catalog.light, &catalog.fixed_dark, &catalog.light_fixed] {
            for (key, value) in set.category(Category::Rgb) {
                let text = value.to_string();
                let channels: Vec<_> = text.split(',').map(str::trim).collect();
                assert_eq!(channels.len(), 3, "{key} is not a triple: {text}");
                assert!(
                    channels.iter().all(|channel| channel.parse::<u8>().is_ok()),
                    "{key} has a non-numeric channel: {text}"
                );
            }
        }
    }

    #[test]
    fn catalog_builder_replaces_whole_sets() {
        let catalog = TokenCatalog::new(TokenSet::new().with(ColorKey::BgDeep, "#000"))
            .with_light(TokenSet::new().with(ColorKey::BgDeep, "#fff"));
        assert_eq!(catalog.base.len(), 1);
        assert_eq!(catalog.light.len(), 1);
        assert!(catalog.fixed_dark.is_empty());
        assert!(catalog.light_fixed.is_empty());
    }
}
