use thiserror::Error;

/// Rejected scene parameters. Returned by [`crate::SceneParams::validate`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("light palette is empty")]
    EmptyPalette,
    #[error("skip cycle must be at least 1")]
    ZeroSkipCycle,
    #[error("skip filter keeps {keep} of every {cycle}, keep must not exceed cycle")]
    KeepExceedsCycle { keep: usize, cycle: usize },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite")]
    NonFinite { name: &'static str },
    #[error("{name} needs at least {min} segments, got {got}")]
    TooFewSegments {
        name: &'static str,
        min: u32,
        got: u32,
    },
    #[error("{name} range is empty: [{min}, {max})")]
    EmptyRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
}
