/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub control: ControlConfig,
}

#[derive(Deserialize, Clone)]
pub struct SimulationConfig {
    pub n_floors: u8,
    pub num_requests: u32,
    pub interval: u32,
    pub queue_capacity: usize,
    pub tick_ms: u64,
    pub fire_grace_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Deserialize, Clone)]
pub struct ControlConfig {
    pub bind_address: String,
    pub port: u16,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config() -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string("config.toml")?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let sim = &config.simulation;
    if sim.n_floors == 0 {
        return Err(ConfigError::InvalidFloorCount(sim.n_floors));
    }
    if sim.num_requests == 0 {
        return Err(ConfigError::InvalidRequestBudget(sim.num_requests));
    }
    if sim.interval == 0 {
        return Err(ConfigError::InvalidInterval(sim.interval));
    }
    if sim.queue_capacity == 0 {
        return Err(ConfigError::InvalidQueueCapacity(sim.queue_capacity));
    }
    Ok(())
}

/***************************************/
/*             Unit tests              */
/***************************************/
