use std::str::FromStr;

/// Demo parameters. Each field can be overridden through the environment.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Frames to render before exiting (`TESSEL_DEMO_FRAMES`).
    pub frames: u32,
    /// Sphere bands around the axis (`TESSEL_DEMO_SPHERE_T`).
    pub sphere_t: u32,
    /// Sphere bands pole to pole (`TESSEL_DEMO_SPHERE_S`).
    pub sphere_s: u32,
    /// Offscreen target edge length in pixels.
    pub target_size: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 240,
            sphere_t: 32,
            sphere_s: 16,
            target_size: 512,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            frames: env_or("TESSEL_DEMO_FRAMES", defaults.frames),
            sphere_t: env_or("TESSEL_DEMO_SPHERE_T", defaults.sphere_t),
            sphere_s: env_or("TESSEL_DEMO_SPHERE_S", defaults.sphere_s),
            target_size: defaults.target_size,
        }
    }
}

fn env_or<T: FromStr + Copy + std::fmt::Debug>(key: &str, fallback: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring {key}={raw:?}; using {fallback:?}");
            fallback
        }),
        Err(_) => fallback,
    }
}
