use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use roomflags::config::Config;
use roomflags::models::{Room, User};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let room = Room::new(config.room_name, config.room_status);
    tracing::info!(
        room = %room.name,
        bits = %format!("{:#04x}", room.status.bits()),
        label = %room.status,
        set = ?room.status.labels().collect::<Vec<_>>(),
        json = %serde_json::to_string(&room)?,
        "Room status"
    );

    let user = User::new(config.user_name, config.user_roles);
    tracing::info!(
        user = %user.name,
        bits = %format!("{:#04x}", user.roles.bits()),
        label = %user.roles,
        held = ?user.roles.labels().collect::<Vec<_>>(),
        json = %serde_json::to_string(&user)?,
        "User roles"
    );

    Ok(())
}
