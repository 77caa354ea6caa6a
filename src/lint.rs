use std::fmt;

use crate::stylesheet::{Scope, Stylesheet};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DanglingReference {
    pub scope: Scope,
    pub declaration: &'static str,
    pub reference: String,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in `{}` references undeclared {}",
            self.declaration,
            self.scope.selector(),
            self.reference
        )
    }
}

/// Custom property names referenced through `var(...)`, fallbacks included.
pub fn var_references(value: &str) -> Vec<&str> {
    let mut references = Vec::new();
    let mut offset = 0;
    while let Some(found) = value[offset..].find("var(") {
        let start = offset + found;
        offset = start + "var(".len();

        let preceded_by_ident = value[..start]
            .chars()
            .next_back()
            .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if preceded_by_ident {
            continue;
        }

        let rest = value[offset..].trim_start();
        if !rest.starts_with("--") {
            continue;
        }
        let end = rest
            .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'))
            .unwrap_or(rest.len());
        if end > 2 {
            references.push(&rest[..end]);
        }
    }
    references
}

pub fn dangling_references(sheet: &Stylesheet) -> Vec<DanglingReference> {
    let mut dangling = Vec::new();
    for block in &sheet.blocks {
        let visible = |name: &str| {
            block.declares(name)
                || block.scope.ancestors().iter().any(|ancestor| {
                    sheet
                        .block(*ancestor)
                        .is_some_and(|ancestor| ancestor.declares(name))
                })
        };

        for declaration in &block.declarations {
            for reference in var_references(&declaration.value) {
                if !visible(reference) {
                    dangling.push(DanglingReference {
                        scope: block.scope,
                        declaration: declaration.name,
                        reference: reference.to_string(),
                    });
                }
            }
        }
    }
    dangling
}
