use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Could not read scenario: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Could not parse scenario: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}
