//! Current-day emphasis strategies.

use std::fmt::Debug;

use crate::types::{COLOR_INVERSE, COLOR_RESET};

/// Styles the cell text of the current day.
///
/// Implementations must not change the visible width of `text`.
pub trait Emphasis: Debug {
    fn emphasize(&self, text: &str) -> String;
}

/// Black on white, the classic terminal highlight.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiInverse;

impl Emphasis for AnsiInverse {
    fn emphasize(&self, text: &str) -> String {
        format!("{}{}{}", COLOR_INVERSE, text, COLOR_RESET)
    }
}

/// No styling at all (`NO_COLOR`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Emphasis for Plain {
    fn emphasize(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick the strategy from the environment: plain when `NO_COLOR` is set and non-empty.
pub fn from_env() -> Box<dyn Emphasis> {
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        Box::new(Plain)
    } else {
        Box::new(AnsiInverse)
    }
}
