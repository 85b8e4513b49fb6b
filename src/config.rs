#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::{Arc, Mutex, OnceLock};

/// Presentation and playback configuration shared across the crate.
pub struct ConfigState {
    /// Whether colored output has been disabled.
    no_color:        bool,
    /// Terminal columns the ambient frame renderer maps the viewport onto.
    viewport_cols:   usize,
    /// Default playback length for the ambient command, in seconds.
    ambient_seconds: f64,
    /// Default frames rendered per second during ambient playback.
    ambient_fps:     u32,
}

impl ConfigState {
    /// Construct a new configuration instance by reading the environment.
    fn new() -> Self {
        Self {
            no_color:        read_flag("PARCIAL_NO_COLOR"),
            viewport_cols:   read_usize("PARCIAL_VIEWPORT_COLS", 80),
            ambient_seconds: read_f64("PARCIAL_AMBIENT_SECONDS", 12.0),
            ambient_fps:     read_u32("PARCIAL_AMBIENT_FPS", 4),
        }
    }

    /// Returns whether colored output has been disabled.
    pub fn no_color(&self) -> bool {
        self.no_color
    }

    /// Returns the terminal columns used by the ambient frame renderer.
    pub fn viewport_cols(&self) -> usize {
        self.viewport_cols
    }

    /// Returns the default ambient playback length, in seconds.
    pub fn ambient_seconds(&self) -> f64 {
        self.ambient_seconds
    }

    /// Returns the default ambient playback frame rate.
    pub fn ambient_fps(&self) -> u32 {
        self.ambient_fps
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Ensure the global configuration has been initialized and return a handle.
pub fn ensure_initialized() -> ConfigHandle {
    let slot = slot();
    let mut guard = slot.lock().expect("config slot poisoned");
    if let Some(cfg) = guard.as_ref() {
        return ConfigHandle(Arc::clone(cfg));
    }

    let cfg = Arc::new(ConfigState::new());
    *guard = Some(Arc::clone(&cfg));
    ConfigHandle(cfg)
}

/// Returns the active configuration, initializing it on demand.
pub fn get() -> ConfigHandle {
    ensure_initialized()
}

/// Returns whether colored output has been disabled.
pub fn no_color() -> bool {
    get().no_color()
}

/// Returns the terminal columns used by the ambient frame renderer.
pub fn viewport_cols() -> usize {
    get().viewport_cols()
}

/// Returns the default ambient playback length, in seconds.
pub fn ambient_seconds() -> f64 {
    get().ambient_seconds()
}

/// Returns the default ambient playback frame rate.
pub fn ambient_fps() -> u32 {
    get().ambient_fps()
}

/// Reads a boolean flag from the environment; set and not "0" means enabled.
fn read_flag(env: &str) -> bool {
    std::env::var(env).map(|value| !value.trim().is_empty() && value.trim() != "0").unwrap_or(false)
}

/// Parses an environment variable into a `usize`, falling back to `default`
/// when parsing fails or the variable is missing.
fn read_usize(env: &str, default: usize) -> usize {
    std::env::var(env).ok().and_then(|value| value.trim().parse::<usize>().ok()).unwrap_or(default)
}

/// Parses an environment variable into a `u32`, falling back to `default`
/// when parsing fails or the variable is missing.
fn read_u32(env: &str, default: u32) -> u32 {
    std::env::var(env).ok().and_then(|value| value.trim().parse::<u32>().ok()).unwrap_or(default)
}

/// Parses an environment variable into an `f64`, falling back to `default`
/// when parsing fails, the value is not finite, or the variable is missing.
fn read_f64(env: &str, default: f64) -> f64 {
    std::env::var(env)
        .ok()
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(default)
}
