use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchedulerError>;

#[derive(Debug, Error)]
pub enum SchedulerError {
    // Raised at construction; policy runs never fail once this passes.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SchedulerError {
    pub fn cylinder_out_of_range(what: &str, value: i32, cylinder_count: i32) -> Self {
        SchedulerError::InvalidParameter(format!(
            "{} {} is outside [0, {}]",
            what,
            value,
            cylinder_count - 1
        ))
    }
}
