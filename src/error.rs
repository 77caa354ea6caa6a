use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TokensError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid generator config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid token file {origin}")]
    TokenFile {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("generator config declares no output targets")]
    NoTargets,
}

pub type Result<T, E = TokensError> = std::result::Result<T, E>;
