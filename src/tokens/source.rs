use std::fmt;
use std::fs;
use std::path::Path;

use super::{Category, TokenKey, TokenSet, TokenValue};
use crate::error::{Result, TokensError};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnmappedReason {
    UnknownCategory,
    NotATable,
    UnknownKey,
    UnsupportedValue,
}

impl UnmappedReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownCategory => "unknown category",
            Self::NotATable => "category is not a table",
            Self::UnknownKey => "no css variable mapped",
            Self::UnsupportedValue => "value is not a string or number",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnmappedKey {
    pub category: String,
    pub key: Option<String>,
    pub reason: UnmappedReason,
}

impl fmt::Display for UnmappedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{}.{}: {}", self.category, key, self.reason.as_str()),
            None => write!(f, "{}: {}", self.category, self.reason.as_str()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadedTokenSet {
    pub set: TokenSet,
    pub unmapped: Vec<UnmappedKey>,
}

impl TokenSet {
    pub fn load(path: &Path) -> Result<LoadedTokenSet> {
        let text = fs::read_to_string(path).map_err(|source| TokensError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parse_token_table(&text, &path.display().to_string())
    }

    pub fn from_toml_str(text: &str) -> Result<LoadedTokenSet> {
        parse_token_table(text, "<inline>")
    }
}

fn parse_token_table(text: &str, origin: &str) -> Result<LoadedTokenSet> {
    let table: toml::Table = toml::from_str(text).map_err(|source| TokensError::TokenFile {
        origin: origin.to_string(),
        source,
    })?;

    let mut loaded = LoadedTokenSet::default();
    for (category_name, entries) in &table {
        let Some(category) = Category::from_name(category_name) else {
            loaded.flag(origin, category_name, None, UnmappedReason::UnknownCategory);
            continue;
        };
        let Some(entries) = entries.as_table() else {
            loaded.flag(origin, category_name, None, UnmappedReason::NotATable);
            continue;
        };

        for (key_name, value) in entries {
            let Some(key) = TokenKey::parse(category, key_name) else {
                loaded.flag(
                    origin,
                    category_name,
                    Some(key_name.as_str()),
                    UnmappedReason::UnknownKey,
                );
                continue;
            };
            let Some(value) = token_value(value) else {
                loaded.flag(
                    origin,
                    category_name,
                    Some(key_name.as_str()),
                    UnmappedReason::UnsupportedValue,
                );
                continue;
            };
            loaded.set.insert(key, value);
        }
    }

    tracing::debug!(
        origin,
        tokens = loaded.set.len(),
        unmapped = loaded.unmapped.len(),
        "loaded token file"
    );
    Ok(loaded)
}

fn token_value(value: &toml::Value) -> Option<TokenValue> {
    match value {
        toml::Value::String(text) => Some(TokenValue::Text(text.clone())),
        toml::Value::Integer(number) => Some(TokenValue::Integer(*number)),
        toml::Value::Float(number) => Some(TokenValue::Float(*number)),
        _ => None,
    }
}

impl LoadedTokenSet {
    fn flag(&mut self, origin: &str, category: &str, key: Option<&str>, reason: UnmappedReason) {
        let unmapped = UnmappedKey {
            category: category.to_string(),
            key: key.map(str::to_string),
            reason,
        };
        tracing::warn!(origin, token = %unmapped, "skipping token without css mapping");
        self.unmapped.push(unmapped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{ColorKey, GlowKey, OpacityKey, ZIndexKey};

    #[test]
    fn parses_categories_by_storage_name() {
        let loaded = TokenSet::from_toml_str(
            r#"
            [color]
            bgDeep = "rgb(242, 242, 248)"

            [glow]
            blue = "0 0 16px red"

            [zIndex]
            modal = 400

            [opacity]
            muted = 0.5
            "#,
        )
        .expect("token file should parse");

        assert!(loaded.unmapped.is_empty());
        assert_eq!(loaded.set.len(), 4);
        assert_eq!(
            loaded.set.get(ColorKey::BgDeep),
            Some(&TokenValue::from("rgb(242, 242, 248)"))
        );
        assert_eq!(
            loaded.set.get(GlowKey::Blue),
            Some(&TokenValue::from("0 0 16px red"))
        );
        assert_eq!(loaded.set.get(ZIndexKey::Modal), Some(&TokenValue::Integer(400)));
        assert_eq!(loaded.set.get(OpacityKey::Muted), Some(&TokenValue::Float(0.5)));
    }

    #[test]
    fn reports_keys_without_css_mapping() {
        let loaded = TokenSet::from_toml_str(
            r##"
            motion = "fast"

            [color]
            bgDeep = "#000"
            accentPink = "#f0f"
            textPrimary = true

            [glowBlur]
            soft = "8px"
            "##,
        )
        .expect("token file should parse");

        assert_eq!(loaded.set.len(), 1);
        assert_eq!(loaded.set.get(ColorKey::BgDeep), Some(&TokenValue::from("#000")));

        let reasons: Vec<_> = loaded
            .unmapped
            .iter()
            .map(|entry| (entry.to_string(), entry.reason))
            .collect();
        assert!(reasons.contains(&(
            "color.accentPink: no css variable mapped".to_string(),
            UnmappedReason::UnknownKey
        )));
        assert!(reasons.contains(&(
            "color.textPrimary: value is not a string or number".to_string(),
            UnmappedReason::UnsupportedValue
        )));
        assert!(reasons.contains(&(
            "glowBlur: unknown category".to_string(),
            UnmappedReason::UnknownCategory
        )));
        assert!(reasons.contains(&(
            "motion: unknown category".to_string(),
            UnmappedReason::UnknownCategory
        )));
        assert_eq!(reasons.len(), 4);
    }

    #[test]
    fn rejects_malformed_toml() {
        let error = TokenSet::from_toml_str("[color\nbgDeep = ").expect_err("should fail");
        assert!(matches!(error, TokensError::TokenFile { .. }));
    }

    #[test]
    fn reads_token_files_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("light.toml");
        fs::write(&path, "[color]\nbgDeep = \"#fff\"\n").expect("write token file");

        let loaded = TokenSet::load(&path).expect("load token file");
        assert_eq!(loaded.set.get(ColorKey::BgDeep), Some(&TokenValue::from("#fff")));

        let missing = TokenSet::load(&dir.path().join("missing.toml")).expect_err("missing");
        assert!(matches!(missing, TokensError::Read { .. }));
    }
}
