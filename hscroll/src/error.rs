//! Widget construction errors.

use std::fmt;

use thiserror::Error;

/// Which of the two controls an error or element refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Errors raised while mounting a widget or reading its configuration.
///
/// Input filtering (non-primary buttons, unscrollable content, debounced
/// wheel moves) is not an error; those events are simply ignored.
#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("element '{0}' not found")]
    ElementNotFound(String),

    #[error("container '{0}' has no items to scroll")]
    EmptyContainer(String),

    #[error("controls are enabled but no {0} control element was given")]
    MissingControl(Side),

    #[error("element '{0}' has no layout box")]
    NotLaidOut(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
