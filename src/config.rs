// src/config.rs
use std::env;

// Configuration for the generator CLI
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_length: usize,

    // Clipboard
    pub copy_to_clipboard: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_length: 16,
            copy_to_clipboard: false,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_length = length,
                Err(_) => log::warn!("Invalid DEFAULT_PASSWORD_LENGTH '{}', using {}", val, config.default_length),
            }
        }

        if let Ok(val) = env::var("PASSGEN_COPY") {
            match val.to_lowercase().as_str() {
                "1" | "true" | "yes" => config.copy_to_clipboard = true,
                "0" | "false" | "no" => config.copy_to_clipboard = false,
                _ => log::warn!("Unknown PASSGEN_COPY value '{}', ignoring", val),
            }
        }

        config
    }
}
