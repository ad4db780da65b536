//! Top-level startup errors.
//!
//! Each concern owns its error type; this enum is what startup reports
//! before aborting.

use thiserror::Error;

use crate::config::ConfigError;
use crate::figure::RigError;
use crate::pose::PoseTableError;
use crate::renderer::RenderError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    PoseTable(#[from] PoseTableError),

    #[error(transparent)]
    Rig(#[from] RigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("{0}")]
    Window(String),
}
