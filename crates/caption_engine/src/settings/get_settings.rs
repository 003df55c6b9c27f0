use crate::settings::structs::AppSettings;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Config(#[from] config::ConfigError),
    #[error("missing credential: {0} is blank")]
    MissingCredential(&'static str),
    #[error("invalid denied term pattern: {0}")]
    DeniedTerms(#[from] regex::Error),
}

/// Load the app settings from YAML + environment variables.
pub fn load_app_settings() -> Result<AppSettings, SettingsError> {
    dotenv::dotenv().ok();
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/settings").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );
    Ok(builder.build()?.try_deserialize::<AppSettings>()?)
}

impl AppSettings {
    /// Reject settings that would send unauthenticated requests to either
    /// external service.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.vision.api_key.trim().is_empty() {
            return Err(SettingsError::MissingCredential("vision.api_key"));
        }
        if self.generation.api_key.trim().is_empty() {
            return Err(SettingsError::MissingCredential("generation.api_key"));
        }
        Ok(())
    }
}

/// Immutable global settings, initialized on first access. Binaries read
/// this; pipeline components take injected settings structs instead.
pub static SETTINGS: LazyLock<AppSettings> =
    LazyLock::new(|| load_app_settings().expect("Failed to load app settings"));

#[must_use]
pub fn settings() -> &'static AppSettings {
    &SETTINGS
}

#[cfg(test)]
mod tests {
    use super::*;
    use vision_api::Likelihood;

    #[test]
    fn defaults_carry_the_shipped_policy() {
        let settings = AppSettings::default();
        assert_eq!(settings.scene.min_face_area, 0.002);
        assert!(!settings.scene.require_central_faces);
        assert_eq!(settings.policy.block_threshold, Likelihood::Likely);
        assert_eq!(settings.policy.max_query_chars, 50);
        assert!(!settings.policy.denied_terms.is_empty());
    }

    #[test]
    fn blank_credentials_fail_validation() {
        let mut settings = AppSettings::default();
        settings.vision.api_key = "k".to_string();
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::MissingCredential("generation.api_key"))
        ));
        settings.generation.api_key = "k".to_string();
        assert!(settings.validate().is_ok());
    }
}
