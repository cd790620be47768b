use std::process::ExitStatus;

use thiserror::Error;

/// Failures surfaced by the format writers. Everything funnels into one
/// enum so the orchestrator can treat any container failure uniformly.
#[derive(Debug, Error)]
pub enum IconError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("iconutil exited with {status}: {stderr}")]
    IconUtil { status: ExitStatus, stderr: String },
}
