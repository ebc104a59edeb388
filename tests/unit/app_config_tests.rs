/*!
 * Tests for application configuration
 */

use std::str::FromStr;

use subpress::app_config::{Config, GenerationProvider, ProviderConfig};

#[test]
fn test_defaultConfig_shouldUseGeminiProvider() {
    let config = Config::default();

    assert_eq!(config.generation.provider, GenerationProvider::Gemini);
    assert_eq!(config.generation.get_model(), "gemini-3-flash-preview");
    assert!(config
        .generation
        .get_endpoint()
        .contains("generativelanguage.googleapis.com"));
    // Credentials are explicit config values, empty until the user sets one
    assert!(config.generation.get_api_key().is_empty());
}

#[test]
fn test_defaultConfig_shouldListBothProviders() {
    let config = Config::default();

    let types: Vec<&str> = config
        .generation
        .available_providers
        .iter()
        .map(|p| p.provider_type.as_str())
        .collect();

    assert!(types.contains(&"gemini"));
    assert!(types.contains(&"ollama"));
}

#[test]
fn test_defaultConfig_shouldValidate() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_shouldRoundTripThroughJson() {
    let config = Config::default();

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.generation.provider, config.generation.provider);
    assert_eq!(parsed.generation.get_model(), config.generation.get_model());
    assert_eq!(
        parsed.generation.common.retry_count,
        config.generation.common.retry_count
    );
}

#[test]
fn test_config_withPartialJson_shouldFillDefaults() {
    let json = r#"{ "generation": { "provider": "ollama" } }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.generation.provider, GenerationProvider::Ollama);
    assert_eq!(config.generation.get_model(), "llama2");
    assert_eq!(config.generation.common.retry_count, 3);
    assert_eq!(config.generation.common.retry_backoff_ms, 1000);
}

#[test]
fn test_config_withSwitchedProvider_shouldResolveMatchingEntry() {
    let mut config = Config::default();
    config.generation.provider = GenerationProvider::Ollama;

    assert_eq!(config.generation.get_model(), "llama2");
    assert!(config.generation.get_endpoint().contains("localhost:11434"));
}

#[test]
fn test_validate_withEmptyModel_shouldFail() {
    let mut config = Config::default();
    for provider in config.generation.available_providers.iter_mut() {
        provider.model = String::new();
    }

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withOutOfRangeTemperature_shouldFail() {
    let mut config = Config::default();
    config.generation.common.temperature = 5.0;

    assert!(config.validate().is_err());
}

#[test]
fn test_generationProvider_fromStr_shouldParseKnownProviders() {
    assert_eq!(
        GenerationProvider::from_str("gemini").unwrap(),
        GenerationProvider::Gemini
    );
    assert_eq!(
        GenerationProvider::from_str("OLLAMA").unwrap(),
        GenerationProvider::Ollama
    );
    assert!(GenerationProvider::from_str("openai").is_err());
}

#[test]
fn test_generationProvider_display_shouldBeLowercase() {
    assert_eq!(GenerationProvider::Gemini.to_string(), "gemini");
    assert_eq!(GenerationProvider::Ollama.to_string(), "ollama");
    assert_eq!(GenerationProvider::Gemini.display_name(), "Gemini");
}

#[test]
fn test_providerConfig_new_shouldUseProviderDefaults() {
    let gemini = ProviderConfig::new(GenerationProvider::Gemini);
    assert_eq!(gemini.provider_type, "gemini");
    assert!(!gemini.model.is_empty());
    assert!(gemini.api_key.is_empty());

    let ollama = ProviderConfig::new(GenerationProvider::Ollama);
    assert_eq!(ollama.provider_type, "ollama");
    assert!(ollama.endpoint.contains("11434"));
}
