use std::env;
use std::str::FromStr;

use crate::error::FlagError;
use crate::models::{parse_label_list, Role, RoomStatus};

#[derive(Debug, Clone)]
pub struct Config {
    pub room_name: String,
    pub room_status: RoomStatus,
    pub user_name: String,
    pub user_roles: Role,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            room_name: env::var("ROOM_NAME").unwrap_or_else(|_| "101".to_string()),
            room_status: parse_bits(
                "ROOM_STATUS",
                &env::var("ROOM_STATUS").unwrap_or_else(|_| "Vacant".to_string()),
            )?,
            user_name: env::var("USER_NAME").unwrap_or_else(|_| "guest".to_string()),
            user_roles: parse_bits(
                "USER_ROLES",
                &env::var("USER_ROLES").unwrap_or_else(|_| "Read".to_string()),
            )?,
        })
    }
}

/// Accept either a decimal `u8` or a `|`-separated list of labels.
fn parse_bits<F>(var: &'static str, value: &str) -> Result<F, ConfigError>
where
    F: bitflags::Flags<Bits = u8> + FromStr<Err = FlagError>,
{
    if let Ok(bits) = value.trim().parse::<u8>() {
        return Ok(F::from_bits_retain(bits));
    }

    let looks_numeric = value.trim().starts_with(|c: char| c.is_ascii_digit());
    if looks_numeric {
        return Err(ConfigError::InvalidBits {
            var,
            value: value.to_string(),
        });
    }

    Ok(parse_label_list(value)?)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a u8 or a list of labels, got {value:?}")]
    InvalidBits { var: &'static str, value: String },
    #[error(transparent)]
    Flag(#[from] FlagError),
}
