use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::OutputTarget;
use crate::error::{Result, TokensError};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TargetState {
    UpToDate,
    Stale,
    Missing,
}

impl TargetState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpToDate => "up to date",
            Self::Stale => "stale",
            Self::Missing => "missing",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TargetStatus {
    pub path: PathBuf,
    pub state: TargetState,
}

/// Every target receives its own full copy; the first failing write aborts the run.
pub fn write_targets(css: &str, targets: &[OutputTarget], root: &Path) -> Result<Vec<WriteReport>> {
    let mut reports = Vec::with_capacity(targets.len());
    for target in targets {
        let path = target.resolve(root);
        write_file(&path, css)?;
        tracing::info!(path = %path.display(), bytes = css.len(), "wrote token stylesheet");
        reports.push(WriteReport {
            path,
            bytes: css.len(),
        });
    }
    Ok(reports)
}

fn write_file(path: &Path, css: &str) -> Result<()> {
    let to_error = |source| TokensError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, css).map_err(to_error)
}

pub fn check_targets(css: &str, targets: &[OutputTarget], root: &Path) -> Result<Vec<TargetStatus>> {
    let mut statuses = Vec::with_capacity(targets.len());
    for target in targets {
        let path = target.resolve(root);
        let state = match fs::read_to_string(&path) {
            Ok(current) if current == css => TargetState::UpToDate,
            Ok(_) => TargetState::Stale,
            Err(error) if error.kind() == ErrorKind::NotFound => TargetState::Missing,
            Err(source) => return Err(TokensError::Read { path, source }),
        };
        if state != TargetState::UpToDate {
            tracing::warn!(path = %path.display(), state = state.as_str(), "token stylesheet out of date");
        }
        statuses.push(TargetStatus { path, state });
    }
    Ok(statuses)
}
