use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LensError>;

/// A required scene object is missing or lacks a component.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("scene object `{0}` not found")]
    MissingObject(String),
    #[error("scene object `{object}` has no {component} component")]
    MissingComponent { object: String, component: String },
}

#[derive(Debug, Error)]
pub enum LensError {
    #[error("scene binding failed: {0}")]
    Config(#[from] BindError),
    #[error("config file `{path}`: {reason}")]
    ConfigFile { path: String, reason: String },
    #[error("flag store `{path}`: {reason}")]
    Store { path: String, reason: String },
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
