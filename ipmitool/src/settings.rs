use config::{Config, Environment, File};
use structs::error::IpmiError;
use structs::settings::{Settings, DEFAULT_API_SERVER};

pub const BASE_DIR: &str = "/etc/cloud-ipmitool";
pub const ENV_PREFIX: &str = "CLOUD_IPMI";

fn read_config(path: &str) -> Result<Config, IpmiError> {
    let config = Config::builder()
        .set_default("api_server", DEFAULT_API_SERVER)?
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()?;
    Ok(config)
}

/// # Errors
///
/// Will return `Err` if the config file exists but can not be read
pub fn load() -> Result<Settings, IpmiError> {
    load_from(format!("{}/{}", BASE_DIR, "config.yml").as_str())
}

/// # Errors
///
/// Will return `Err` if `path` exists but can not be parsed
pub fn load_from(path: &str) -> Result<Settings, IpmiError> {
    let settings = read_config(path)?.try_deserialize::<Settings>()?;
    Ok(settings)
}
