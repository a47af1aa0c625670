pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{FlagError, Result};
pub use models::{Role, Room, RoomStatus, User};
