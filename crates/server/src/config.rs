use std::env;

use thiserror::Error;
use waymark::{config::MapConfig, routing::DEFAULT_DRIVING_SPEED_KMH};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

#[derive(Error, Debug)]
pub enum Error {
    #[error("WAYMARK_PORT is not a valid port: {0}")]
    InvalidPort(String),
    #[error("WAYMARK_SPEED_KMH must be a positive number, got: {0}")]
    InvalidSpeed(String),
    #[error("WAYMARK_ROUTER must be \"osrm\" or \"straight-line\", got: {0}")]
    UnknownRouter(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouterKind {
    #[default]
    Osrm,
    StraightLine,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub router: RouterKind,
    pub osrm_url: String,
    pub speed_kmh: f64,
    pub map: MapConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            router: Default::default(),
            osrm_url: DEFAULT_OSRM_URL.into(),
            speed_kmh: DEFAULT_DRIVING_SPEED_KMH,
            map: Default::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, self::Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, self::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(port) = lookup("WAYMARK_PORT") {
            config.port = port.parse().map_err(|_| self::Error::InvalidPort(port))?;
        }
        if let Some(router) = lookup("WAYMARK_ROUTER") {
            config.router = match router.as_str() {
                "osrm" => RouterKind::Osrm,
                "straight-line" => RouterKind::StraightLine,
                _ => return Err(self::Error::UnknownRouter(router)),
            };
        }
        if let Some(url) = lookup("WAYMARK_OSRM_URL") {
            config.osrm_url = url.trim_end_matches('/').to_string();
        }
        if let Some(speed) = lookup("WAYMARK_SPEED_KMH") {
            config.speed_kmh = match speed.parse::<f64>() {
                Ok(value) if value > 0.0 => value,
                _ => return Err(self::Error::InvalidSpeed(speed)),
            };
        }
        Ok(config)
    }
}
