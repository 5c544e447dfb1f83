use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color {input:?}: expected #RRGGBB or #AARRGGBB")]
    InvalidHex { input: String },
}
