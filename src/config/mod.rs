use secrecy::Secret;
use std::env;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct PopeConfig {
    pub port: u16,
    pub openai: OpenAiSettings,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: Secret<String>,
    /// Chat model identifier (e.g., gpt-4)
    pub model: String,
    /// API base URL; overridable so tests can point at a local server
    pub base_url: String,
}

impl PopeConfig {
    pub fn load() -> anyhow::Result<Self> {
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let port = get_env("PORT", Some(&DEFAULT_PORT.to_string()), is_prod)?
            .parse()
            .unwrap_or(DEFAULT_PORT);

        Ok(PopeConfig {
            port,
            openai: OpenAiSettings {
                api_key: Secret::new(get_env("OPENAI_API_KEY", None, is_prod)?),
                model: get_env("OPENAI_MODEL", Some(DEFAULT_MODEL), is_prod)?,
                base_url: get_env("OPENAI_BASE_URL", Some(DEFAULT_BASE_URL), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> anyhow::Result<String> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                anyhow::bail!("{} is required in production but not set", key)
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                anyhow::bail!("{} is required but not set", key)
            }
        }
    }
}
