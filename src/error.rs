// error.rs - Crate error type
//
// Data-quality problems never surface here; they degrade to skipped rows
// or zero rates. These are the failures a caller can actually act on.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("record is missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid age `{0}`")]
    InvalidAge(String),

    #[error("invalid canvas dimensions {w}x{h}")]
    InvalidDimensions { w: u32, h: u32 },

    #[error("invalid config: `{field}` = {value} is outside {range}")]
    InvalidConfig { field: &'static str, value: f32, range: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
