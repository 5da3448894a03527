use thiserror::Error;

/// CLI-level error: dish failures plus config handling.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Dish(#[from] dishy_core::DishError),

    #[error("config loading failed: {0}")]
    Config(Box<figment::Error>),

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
