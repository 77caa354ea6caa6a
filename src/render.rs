use std::fmt;

use crate::tokens::{Category, TokenSet};

/// Category order in every rendered block, independent of how a set was built.
/// Blocks follow category declaration order.
pub const RENDER_ORDER: [Category; 24] = Category::ALL;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Indent {
    #[default]
    Block,
    Nested,
}

impl Indent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "  ",
            Self::Nested => "    ",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Declaration {
    pub name: &'static str,
    pub value: String,
}

impl Declaration {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    pub fn line(&self, indent: Indent) -> String {
        format!("{}{self}", indent.as_str())
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

pub fn render_declarations(set: &TokenSet) -> Vec<Declaration> {
    RENDER_ORDER
        .into_iter()
        .flat_map(|category| set.category(category))
        .filter(|(key, _)| !key.is_coarse_pointer())
        .map(|(key, value)| Declaration::new(key.css_var(), value.to_string()))
        .collect()
}

pub fn render_coarse_pointer(set: &TokenSet) -> Vec<Declaration> {
    set.category(Category::Touch)
        .filter(|(key, _)| key.is_coarse_pointer())
        .map(|(key, value)| Declaration::new(key.css_var(), value.to_string()))
        .collect()
}

pub fn render_lines(declarations: &[Declaration], indent: Indent) -> String {
    declarations
        .iter()
        .map(|declaration| declaration.line(indent))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_variables(set: &TokenSet, indent: Indent) -> String {
    render_lines(&render_declarations(set), indent)
}
