use crate::error::CompileError;
use crate::pipeline::confidence::thresholds;
use crate::pipeline::generation_log::DEFAULT_CAPACITY;

/// Application-level constants
pub const APP_NAME: &str = "Cosmoprompt";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the generation log capacity
pub const ENV_LOG_CAPACITY: &str = "COSMOPROMPT_LOG_CAPACITY";
/// Environment variable toggling generation logging ("true"/"false", "1"/"0")
pub const ENV_LOG_COMPILATIONS: &str = "COSMOPROMPT_LOG_COMPILATIONS";

/// Log filter used when RUST_LOG is unset
pub fn default_log_filter() -> &'static str {
    "cosmoprompt=info,cosmoprompt_lib=info,warn"
}

/// Runtime settings for a `PromptCompiler`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerConfig {
    /// Maximum entries kept by the generation log.
    pub log_capacity: usize,
    /// Whether compilations are appended to the generation log.
    pub log_compilations: bool,
    pub low_confidence_threshold: f64,
    pub high_confidence_threshold: f64,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            log_capacity: DEFAULT_CAPACITY,
            log_compilations: true,
            low_confidence_threshold: thresholds::LOW,
            high_confidence_threshold: thresholds::HIGH,
        }
    }
}

impl CompilerConfig {
    /// Defaults overridden by `COSMOPROMPT_*` environment variables.
    pub fn from_env() -> Result<Self, CompileError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CompileError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LOG_CAPACITY) {
            config.log_capacity = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(CompileError::Config(format!(
                        "{ENV_LOG_CAPACITY} must be a positive integer, got '{raw}'"
                    )))
                }
            };
        }

        if let Some(raw) = lookup(ENV_LOG_COMPILATIONS) {
            config.log_compilations = parse_flag(&raw).ok_or_else(|| {
                CompileError::Config(format!(
                    "{ENV_LOG_COMPILATIONS} must be true or false, got '{raw}'"
                ))
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
