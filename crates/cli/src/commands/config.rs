use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use lounge_core::config::{resolve_config_path, AppConfig, LlmProvider, LoadOptions, LogFormat};
use secrecy::ExposeSecret;
use toml::Value;

use crate::commands::{CommandResult, EXIT_CONFIG};

struct FieldLine {
    key: &'static str,
    env_keys: &'static [&'static str],
    value: String,
}

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "config",
                "config_validation",
                error.to_string(),
                EXIT_CONFIG,
            )
        }
    };

    crate::init_logging(&config);

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in effective_fields(&config) {
        let source = field_source(
            field.key,
            field.env_keys,
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        );
        lines.push(render_line(field.key, &field.value, source));
    }

    CommandResult { exit_code: 0, output: lines.join("\n") }
}

fn effective_fields(config: &AppConfig) -> Vec<FieldLine> {
    let api_key = match &config.llm.api_key {
        Some(key) if key.expose_secret().trim().is_empty() => "<empty>".to_string(),
        Some(_) => "<redacted>".to_string(),
        None => "<unset>".to_string(),
    };

    vec![
        FieldLine {
            key: "llm.provider",
            env_keys: &["LOUNGE_LLM_PROVIDER"],
            value: provider_name(config.llm.provider).to_string(),
        },
        FieldLine { key: "llm.api_key", env_keys: &["LOUNGE_LLM_API_KEY"], value: api_key },
        FieldLine {
            key: "llm.base_url",
            env_keys: &["LOUNGE_LLM_BASE_URL"],
            value: config.llm.base_url.clone(),
        },
        FieldLine {
            key: "llm.model",
            env_keys: &["LOUNGE_LLM_MODEL"],
            value: config.llm.model.clone(),
        },
        FieldLine {
            key: "llm.timeout_secs",
            env_keys: &["LOUNGE_LLM_TIMEOUT_SECS"],
            value: config.llm.timeout_secs.to_string(),
        },
        FieldLine {
            key: "catalog.path",
            env_keys: &["LOUNGE_CATALOG_PATH"],
            value: config.catalog.path.display().to_string(),
        },
        FieldLine {
            key: "menu.default_language",
            env_keys: &["LOUNGE_MENU_DEFAULT_LANGUAGE"],
            value: config.menu.default_language.code().to_string(),
        },
        FieldLine {
            key: "menu.venue_name",
            env_keys: &["LOUNGE_MENU_VENUE_NAME"],
            value: config.menu.venue_name.clone(),
        },
        FieldLine {
            key: "menu.share_url",
            env_keys: &["LOUNGE_MENU_SHARE_URL"],
            value: config.menu.share_url.clone().unwrap_or_else(|| "<unset>".to_string()),
        },
        FieldLine {
            key: "logging.level",
            env_keys: &["LOUNGE_LOGGING_LEVEL", "LOUNGE_LOG_LEVEL"],
            value: config.logging.level.clone(),
        },
        FieldLine {
            key: "logging.format",
            env_keys: &["LOUNGE_LOGGING_FORMAT", "LOUNGE_LOG_FORMAT"],
            value: format_name(config.logging.format).to_string(),
        },
    ]
}

fn provider_name(provider: LlmProvider) -> &'static str {
    match provider {
        LlmProvider::Gemini => "gemini",
        LlmProvider::Offline => "offline",
    }
}

fn format_name(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Compact => "compact",
        LogFormat::Pretty => "pretty",
        LogFormat::Json => "json",
    }
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("config file"));
            return format!("file ({})", file_path.display());
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
