use log::Level;

/// How long each featured entry stays on screen before the banner advances.
pub const ROTATION_INTERVAL_MS: u32 = 10_000;

pub const ANILIST_GRAPHQL_URL: &str = "https://graphql.anilist.co";

/// Give up on the metadata lookup after this long and show the retry state.
pub const METADATA_TIMEOUT_MS: u32 = 15_000;

pub const PLAYER_HOST: &str = "anilist-player.netlify.app";

// Used when the remote record carries no cover colour.
pub const DEFAULT_ACCENT_COLOR: &str = "#7EB2FF";

/// Render remote descriptions as raw markup instead of escaped text.
pub const TRUST_REMOTE_MARKUP: bool = false;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
