//! Gemini client configuration.
//!
//! Values come from defaults, then environment variables, then command-line
//! flags, each layer overriding the previous one.

/// Primary environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Fallback environment variable holding the API key.
pub const API_KEY_FALLBACK_ENV: &str = "API_KEY";

/// Default REST endpoint of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for the goal picture text.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-pro-preview";

/// Default text-to-speech model.
pub const DEFAULT_SPEECH_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Default prebuilt voice.
pub const DEFAULT_VOICE: &str = "Kore";

/// Default thinking budget for the text model.
pub const DEFAULT_THINKING_BUDGET: i32 = 2000;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Settings for talking to the Gemini API.
#[derive(Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// API key; required only by commands that call the API.
    pub api_key: Option<String>,
    /// Base URL without a trailing `/models`.
    pub base_url: String,
    /// Model used for the goal picture text.
    pub text_model: String,
    /// Model used for speech synthesis.
    pub speech_model: String,
    /// Prebuilt voice name.
    pub voice: String,
    /// Thinking budget for the text model.
    pub thinking_budget: i32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            speech_model: DEFAULT_SPEECH_MODEL.to_string(),
            voice: DEFAULT_VOICE.to_string(),
            thinking_budget: DEFAULT_THINKING_BUDGET,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// The API key is never printed
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("speech_model", &self.speech_model)
            .field("voice", &self.voice)
            .field("thinking_budget", &self.thinking_budget)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    /// Builds a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Recognized variables: `GEMINI_API_KEY` (or `API_KEY`),
    /// `MANIFESTO_BASE_URL`, `MANIFESTO_TEXT_MODEL`, `MANIFESTO_SPEECH_MODEL`,
    /// `MANIFESTO_VOICE`. Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self {
            api_key: get(API_KEY_ENV).or_else(|| get(API_KEY_FALLBACK_ENV)),
            ..Self::default()
        };

        if let Some(url) = get("MANIFESTO_BASE_URL") {
            config.base_url = url;
        }
        if let Some(model) = get("MANIFESTO_TEXT_MODEL") {
            config.text_model = model;
        }
        if let Some(model) = get("MANIFESTO_SPEECH_MODEL") {
            config.speech_model = model;
        }
        if let Some(voice) = get("MANIFESTO_VOICE") {
            config.voice = voice;
        }

        config
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(ref model) = overrides.text_model {
            self.text_model = model.clone();
        }
        if let Some(ref model) = overrides.speech_model {
            self.speech_model = model.clone();
        }
        if let Some(ref voice) = overrides.voice {
            self.voice = voice.clone();
        }
        if let Some(secs) = overrides.timeout_secs {
            self.timeout_secs = secs;
        }
        self
    }
}

/// Optional values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Text model override.
    pub text_model: Option<String>,
    /// Speech model override.
    pub speech_model: Option<String>,
    /// Voice override.
    pub voice: Option<String>,
    /// Timeout override in seconds.
    pub timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GeminiConfig::from_lookup(lookup(&[]));
        assert_eq!(config, GeminiConfig::default());
        assert_eq!(config.api_key, None);
        assert_eq!(config.voice, "Kore");
    }

    #[test]
    fn test_api_key_precedence() {
        let config = GeminiConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "primary"),
            ("API_KEY", "fallback"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("primary"));

        let config = GeminiConfig::from_lookup(lookup(&[("API_KEY", "fallback")]));
        assert_eq!(config.api_key.as_deref(), Some("fallback"));

        let config = GeminiConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", " "),
            ("API_KEY", "fallback"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("fallback"));
    }

    #[test]
    fn test_env_overrides() {
        let config = GeminiConfig::from_lookup(lookup(&[
            ("MANIFESTO_BASE_URL", "http://localhost:8080/v1beta"),
            ("MANIFESTO_TEXT_MODEL", "gemini-2.5-pro"),
            ("MANIFESTO_VOICE", "Puck"),
        ]));
        assert_eq!(config.base_url, "http://localhost:8080/v1beta");
        assert_eq!(config.text_model, "gemini-2.5-pro");
        assert_eq!(config.speech_model, DEFAULT_SPEECH_MODEL);
        assert_eq!(config.voice, "Puck");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = GeminiConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "secret-key")]));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_flag_overrides_win() {
        let config = GeminiConfig::from_lookup(lookup(&[("MANIFESTO_VOICE", "Puck")]))
            .with_overrides(&ConfigOverrides {
                voice: Some("Charon".to_string()),
                timeout_secs: Some(30),
                ..Default::default()
            });
        assert_eq!(config.voice, "Charon");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
    }
}
