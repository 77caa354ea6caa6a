use crate::render::{Declaration, Indent, render_coarse_pointer, render_declarations};
use crate::theme::{ColorScheme, ThemeAttribute, fixed_region_selector};
use crate::tokens::{TokenCatalog, TokenSet};

pub const BANNER: &str = "/* Generated by arcui-tokens from the ARC UI token catalog. Do not edit. */";

const COARSE_POINTER: &str = "(pointer: coarse)";
const PREFERS_LIGHT: &str = "(prefers-color-scheme: light)";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Scope {
    Root,
    CoarsePointer,
    Light,
    AutoLight,
    Fixed,
    LightFixed,
    AutoLightFixed,
}

impl Scope {
    pub const ALL: [Scope; 7] = [
        Scope::Root,
        Scope::CoarsePointer,
        Scope::Light,
        Scope::AutoLight,
        Scope::Fixed,
        Scope::LightFixed,
        Scope::AutoLightFixed,
    ];

    pub fn selector(self) -> String {
        match self {
            Self::Root | Self::CoarsePointer => ":root".to_string(),
            Self::Light => ThemeAttribute::Light.selector(),
            Self::AutoLight => ThemeAttribute::Auto.selector(),
            Self::Fixed => fixed_region_selector(),
            Self::LightFixed => {
                format!("{} {}", ThemeAttribute::Light.selector(), fixed_region_selector())
            }
            Self::AutoLightFixed => {
                format!("{} {}", ThemeAttribute::Auto.selector(), fixed_region_selector())
            }
        }
    }

    pub const fn media(self) -> Option<&'static str> {
        match self {
            Self::CoarsePointer => Some(COARSE_POINTER),
            Self::AutoLight | Self::AutoLightFixed => Some(PREFERS_LIGHT),
            Self::Root | Self::Light | Self::Fixed | Self::LightFixed => None,
        }
    }

    pub const fn color_scheme(self) -> Option<ColorScheme> {
        match self {
            Self::Root | Self::Fixed => Some(ColorScheme::Dark),
            Self::Light | Self::AutoLight => Some(ColorScheme::Light),
            Self::CoarsePointer | Self::LightFixed | Self::AutoLightFixed => None,
        }
    }

    /// Scopes whose declarations are always visible to this one through the cascade.
    pub const fn ancestors(self) -> &'static [Scope] {
        match self {
            Self::Root => &[],
            Self::CoarsePointer | Self::Light | Self::AutoLight | Self::Fixed => &[Scope::Root],
            Self::LightFixed => &[Scope::Fixed, Scope::Light, Scope::Root],
            Self::AutoLightFixed => &[Scope::Fixed, Scope::AutoLight, Scope::Root],
        }
    }

    pub const fn indent(self) -> Indent {
        match self.media() {
            Some(_) => Indent::Nested,
            None => Indent::Block,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Block {
    pub scope: Scope,
    pub declarations: Vec<Declaration>,
}

impl Block {
    pub fn new(scope: Scope, declarations: Vec<Declaration>) -> Self {
        Self {
            scope,
            declarations,
        }
    }

    pub fn declares(&self, name: &str) -> bool {
        self.declarations
            .iter()
            .any(|declaration| declaration.name == name)
    }

    pub fn to_css(&self) -> String {
        let indent = self.scope.indent();
        let selector = self.scope.selector();
        let mut lines = Vec::with_capacity(self.declarations.len() + 4);

        match self.scope.media() {
            Some(media) => {
                lines.push(format!("@media {media} {{"));
                lines.push(format!("  {selector} {{"));
            }
            None => lines.push(format!("{selector} {{")),
        }
        if let Some(scheme) = self.scope.color_scheme() {
            lines.push(format!("{}color-scheme: {};", indent.as_str(), scheme.as_str()));
        }
        lines.extend(
            self.declarations
                .iter()
                .map(|declaration| declaration.line(indent)),
        );
        if self.scope.media().is_some() {
            lines.push("  }".to_string());
        }
        lines.push("}".to_string());
        lines.join("\n")
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Stylesheet {
    pub blocks: Vec<Block>,
}

impl Stylesheet {
    pub fn assemble(catalog: &TokenCatalog) -> Self {
        warn_coarse_pointer_overrides("light", &catalog.light);
        warn_coarse_pointer_overrides("fixed_dark", &catalog.fixed_dark);
        warn_coarse_pointer_overrides("light_fixed", &catalog.light_fixed);

        let blocks = Scope::ALL
            .into_iter()
            .map(|scope| {
                let declarations = match scope {
                    Scope::Root => render_declarations(&catalog.base),
                    Scope::CoarsePointer => render_coarse_pointer(&catalog.base),
                    Scope::Light | Scope::AutoLight => render_declarations(&catalog.light),
                    Scope::Fixed => render_declarations(&catalog.fixed_dark),
                    Scope::LightFixed | Scope::AutoLightFixed => {
                        render_declarations(&catalog.light_fixed)
                    }
                };
                tracing::debug!(
                    scope = ?scope,
                    declarations = declarations.len(),
                    "rendered block"
                );
                Block::new(scope, declarations)
            })
            .collect();

        Self { blocks }
    }

    pub fn block(&self, scope: Scope) -> Option<&Block> {
        self.blocks.iter().find(|block| block.scope == scope)
    }

    pub fn blocks_declaring(&self, name: &str) -> Vec<Scope> {
        self.blocks
            .iter()
            .filter(|block| block.declares(name))
            .map(|block| block.scope)
            .collect()
    }

    pub fn to_css(&self) -> String {
        let mut sections = Vec::with_capacity(self.blocks.len() + 1);
        sections.push(BANNER.to_string());
        sections.extend(self.blocks.iter().map(Block::to_css));
        let mut css = sections.join("\n\n");
        css.push('\n');
        css
    }
}

fn warn_coarse_pointer_overrides(set_name: &str, set: &TokenSet) {
    for (key, _) in set.iter().filter(|(key, _)| key.is_coarse_pointer()) {
        tracing::warn!(
            set = set_name,
            token = %key,
            "coarse-pointer tokens are only read from the base set"
        );
    }
}

pub fn generate_tokens_css(catalog: &TokenCatalog) -> String {
    Stylesheet::assemble(catalog).to_css()
}
