use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TokensError};
use crate::tokens::{TokenCatalog, TokenSet, UnmappedKey};

pub const DEFAULT_CONFIG_FILE: &str = "arcui-tokens.toml";

pub const DEFAULT_TARGETS: [&str; 2] = [
    "shared/tokens.css",
    "packages/web-components/src/styles/tokens.css",
];

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputTarget {
    pub path: PathBuf,
}

impl OutputTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn resolve(&self, root: &Path) -> PathBuf {
        resolve_path(root, &self.path)
    }
}

/// Token files that replace a built-in set wholesale. Sets are never merged.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TokenSources {
    pub base: Option<PathBuf>,
    pub light: Option<PathBuf>,
    pub fixed_dark: Option<PathBuf>,
    pub light_fixed: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(rename = "target", default)]
    pub targets: Vec<OutputTarget>,
    #[serde(default)]
    pub sources: TokenSources,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            targets: DEFAULT_TARGETS.into_iter().map(OutputTarget::new).collect(),
            sources: TokenSources::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogLoad {
    pub catalog: TokenCatalog,
    pub unmapped: Vec<UnmappedKey>,
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| TokensError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| TokensError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            targets = config.targets.len(),
            "loaded generator config"
        );
        Ok(config)
    }

    /// Resolves the config file and the directory its paths are relative to.
    ///
    /// An explicit `root` always wins. Otherwise an explicit config file anchors
    /// paths at its own directory. Without a config file, `<root>/arcui-tokens.toml`
    /// is used when present, and the built-in targets otherwise.
    pub fn discover(config: Option<&Path>, root: Option<&Path>) -> Result<(Self, PathBuf)> {
        if let Some(path) = config {
            let loaded = Self::load(path)?;
            let root = match root {
                Some(root) => root.to_path_buf(),
                None => config_dir(path),
            };
            return Ok((loaded, root));
        }

        let root = root.map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let candidate = root.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            return Ok((Self::load(&candidate)?, root));
        }

        tracing::debug!(root = %root.display(), "no generator config found, using built-in targets");
        Ok((Self::default(), root))
    }

    pub fn with_target(mut self, path: impl Into<PathBuf>) -> Self {
        self.targets.push(OutputTarget::new(path));
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(TokensError::NoTargets);
        }
        Ok(())
    }

    pub fn catalog(&self, root: &Path) -> Result<CatalogLoad> {
        let mut catalog = TokenCatalog::default();
        let mut unmapped = Vec::new();

        let slots = [
            (&self.sources.base, &mut catalog.base),
            (&self.sources.light, &mut catalog.light),
            (&self.sources.fixed_dark, &mut catalog.fixed_dark),
            (&self.sources.light_fixed, &mut catalog.light_fixed),
        ];
        for (source, slot) in slots {
            let Some(source) = source else {
                continue;
            };
            let path = resolve_path(root, source);
            let loaded = TokenSet::load(&path)?;
            tracing::info!(path = %path.display(), tokens = loaded.set.len(), "using token file");
            *slot = loaded.set;
            unmapped.extend(loaded.unmapped);
        }

        Ok(CatalogLoad { catalog, unmapped })
    }
}

fn config_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::ColorKey;

    fn parse(text: &str) -> std::result::Result<GeneratorConfig, toml::de::Error> {
        toml::from_str(text)
    }

    #[test]
    fn default_config_writes_shared_and_web_component_copies() {
        let config = GeneratorConfig::default();
        let paths: Vec<_> = config.targets.iter().map(|target| target.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("shared/tokens.css"),
                PathBuf::from("packages/web-components/src/styles/tokens.css"),
            ]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_targets_and_sources() {
        let config = parse(
            r#"
            [[target]]
            path = "shared/tokens.css"

            [[target]]
            path = "packages/docs/src/styles/tokens.css"

            [sources]
            light = "tokens/light.toml"
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.targets.len(), 2);
        assert_eq!(
            config.sources.light,
            Some(PathBuf::from("tokens/light.toml"))
        );
        assert_eq!(config.sources.base, None);
    }

    #[test]
    fn rejects_unknown_fields_and_missing_targets() {
        assert!(parse("[[target]]\npath = \"a.css\"\nmode = \"copy\"\n").is_err());

        let empty = parse("").expect("empty config parses");
        assert!(matches!(empty.validate(), Err(TokensError::NoTargets)));
    }

    #[test]
    fn resolves_relative_paths_against_root() {
        let target = OutputTarget::new("shared/tokens.css");
        assert_eq!(
            target.resolve(Path::new("/repo")),
            PathBuf::from("/repo/shared/tokens.css")
        );
        let absolute = OutputTarget::new("/abs/tokens.css");
        assert_eq!(
            absolute.resolve(Path::new("/repo")),
            PathBuf::from("/abs/tokens.css")
        );
    }

    #[test]
    fn load_reports_missing_and_invalid_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = GeneratorConfig::load(&dir.path().join(DEFAULT_CONFIG_FILE));
        assert!(matches!(missing, Err(TokensError::Read { .. })));

        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[[target]]\npath = 3\n").expect("write config");
        assert!(matches!(
            GeneratorConfig::load(&path),
            Err(TokensError::Config { .. })
        ));
    }

    #[test]
    fn explicit_config_anchors_paths_at_its_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let site = dir.path().join("site");
        fs::create_dir_all(&site).expect("create site dir");
        let config_path = site.join("tokens.toml");
        fs::write(&config_path, "[[target]]\npath = \"out/tokens.css\"\n").expect("write config");

        let (config, root) =
            GeneratorConfig::discover(Some(config_path.as_path()), None).expect("discover config");

        assert_eq!(root, site);
        assert_eq!(config.targets, vec![OutputTarget::new("out/tokens.css")]);
        assert_eq!(config.targets[0].resolve(&root), site.join("out/tokens.css"));
    }

    #[test]
    fn explicit_root_overrides_config_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let site = dir.path().join("site");
        fs::create_dir_all(&site).expect("create site dir");
        let config_path = site.join("tokens.toml");
        fs::write(&config_path, "[[target]]\npath = \"out/tokens.css\"\n").expect("write config");

        let (_, root) = GeneratorConfig::discover(Some(config_path.as_path()), Some(dir.path()))
            .expect("discover config");

        assert_eq!(root, dir.path());
    }

    #[test]
    fn finds_default_config_file_under_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[[target]]\npath = \"docs/tokens.css\"\n",
        )
        .expect("write config");

        let (config, root) = GeneratorConfig::discover(None, Some(dir.path())).expect("discover");

        assert_eq!(root, dir.path());
        assert_eq!(config.targets, vec![OutputTarget::new("docs/tokens.css")]);
    }

    #[test]
    fn falls_back_to_built_in_targets_without_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");

        let (config, root) = GeneratorConfig::discover(None, Some(dir.path())).expect("discover");

        assert_eq!(root, dir.path());
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn bare_config_file_name_resolves_against_current_directory() {
        assert_eq!(config_dir(Path::new(DEFAULT_CONFIG_FILE)), PathBuf::from("."));
        assert_eq!(
            config_dir(Path::new("site/arcui-tokens.toml")),
            PathBuf::from("site")
        );
    }

    #[test]
    fn source_files_replace_built_in_sets() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("tokens")).expect("create tokens dir");
        fs::write(
            dir.path().join("tokens/light.toml"),
            "[color]\nbgDeep = \"#fafafa\"\nbgNebula = \"#000\"\n",
        )
        .expect("write token file");

        let config = GeneratorConfig {
            sources: TokenSources {
                light: Some(PathBuf::from("tokens/light.toml")),
                ..TokenSources::default()
            },
            ..GeneratorConfig::default()
        };
        let load = config.catalog(dir.path()).expect("catalog loads");

        assert_eq!(load.catalog.light.len(), 1);
        assert!(load.catalog.light.contains(ColorKey::BgDeep));
        assert_eq!(load.catalog.base, crate::tokens::tokens());
        assert_eq!(load.unmapped.len(), 1);
        assert_eq!(load.unmapped[0].key.as_deref(), Some("bgNebula"));
    }
}
