use std::path::PathBuf;

use delta::DeltaError;
use document::DocumentError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("error comparing file {}: {source}", path.display())]
    Delta { path: PathBuf, source: DeltaError },
}
