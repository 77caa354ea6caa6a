pub mod config;
pub mod error;
pub mod lint;
pub mod output;
pub mod render;
pub mod stylesheet;
pub mod theme;
pub mod tokens;

pub use config::{CatalogLoad, GeneratorConfig, OutputTarget, TokenSources};
pub use error::{Result, TokensError};
pub use lint::{DanglingReference, dangling_references, var_references};
pub use output::{TargetState, TargetStatus, WriteReport, check_targets, write_targets};
pub use render::{Declaration, Indent, render_coarse_pointer, render_declarations, render_variables};
pub use stylesheet::{Block, Scope, Stylesheet, generate_tokens_css};
pub use tokens::{
    Category, TokenCatalog, TokenKey, TokenSet, TokenValue, fixed_dark_tokens, light_fixed_tokens,
    light_tokens, tokens,
};
