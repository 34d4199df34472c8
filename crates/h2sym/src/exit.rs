use std::fmt;

use h2sym_registry::RegistryError;

// Exit codes shared with the other 3leaps CLIs.
pub const SUCCESS: i32 = 0;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn registry_error(context: &str, err: RegistryError) -> CliError {
    match err {
        RegistryError::UnrecognizedCode { .. } | RegistryError::UnrecognizedName { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        RegistryError::UnknownCategory(_) => CliError::new(USAGE, format!("{context}: {err}")),
    }
}
