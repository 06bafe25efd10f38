//! Platform-specific configuration loading.
//!
//! - **Web** (WASM): defaults, with `BITSA_API_URL` / `BITSA_DEMO` baked in at
//!   compile time; the bearer token comes from `localStorage`.
//! - **Desktop** (native): `.env` via dotenvy, then `bitsa.toml` from the working
//!   directory or `<config_dir>/bitsa/`, then environment overrides. The token
//!   comes from `BITSA_API_TOKEN`.

use interests::BitsaConfig;

/// Load the client configuration for the current platform.
pub fn load_config() -> BitsaConfig {
    #[cfg(target_arch = "wasm32")]
    {
        BitsaConfig::default().apply_env(|key| match key {
            "BITSA_API_URL" => option_env!("BITSA_API_URL").map(str::to_string),
            "BITSA_DEMO" => option_env!("BITSA_DEMO").map(str::to_string),
            "BITSA_ONBOARDING" => option_env!("BITSA_ONBOARDING").map(str::to_string),
            _ => None,
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();

        let local = std::path::PathBuf::from(BitsaConfig::filename());
        let path = if local.exists() {
            local
        } else {
            dirs::config_dir()
                .unwrap_or_else(|| std::path::PathBuf::from("."))
                .join("bitsa")
                .join(BitsaConfig::filename())
        };

        let config = match BitsaConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Ignoring unreadable configuration");
                BitsaConfig::default()
            }
        };
        config.apply_env(|key| std::env::var(key).ok())
    }
}

/// Read the bearer token for the current platform, if one was stored.
pub fn load_token(config: &BitsaConfig) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(&config.api.token_storage_key).ok().flatten())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = config;
        std::env::var("BITSA_API_TOKEN").ok()
    }
}
