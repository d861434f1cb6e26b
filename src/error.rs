use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("{0}")]
    Parse(#[from] getopts::Fail),
    #[error("invalid value for --{name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
    #[error("unknown fill mode {0:?}")]
    UnknownFill(String),
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid arguments: {0}")]
    Options(#[from] OptionsError),
}
