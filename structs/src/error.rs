use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpmiError {
    #[error("{0}")]
    InvalidAddress(String),

    #[error("VApp node IP {0} is not valid")]
    UnmappedAddress(String),

    #[error("Error sending command - response code {code}")]
    HttpError { code: u16, body: String },

    #[error("Error sending command '{url}'")]
    TransportError { url: String, reason: String },

    #[error("Unknown subcommand: {0}")]
    UnknownSubcommand(String),

    #[error("Unknown power state: {0}")]
    UnknownPowerState(String),

    #[error("Unknown boot device: {0}")]
    UnknownBootDevice(String),

    #[error("could not load settings: {0}")]
    Settings(#[from] config::ConfigError),
}
