use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_MODELS: &str = "conservative,moderate,aggressive";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_DASHBOARD_DIR: &str = "dashboard/trading";
const LIVENESS_FILE_NAME: &str = "model_pids.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    /// Directory holding one `trades_<model>.db` per model.
    pub data_dir: PathBuf,
    /// Dashboard root: `index.html` plus the files served under `/static`.
    pub dashboard_dir: PathBuf,
    /// Existence of this file means the trading processes are running.
    pub liveness_file: PathBuf,

    /// Ordered set of model (strategy variant) names.
    pub models: Vec<String>,

    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let models = parse_models(&env::var("MODELS").unwrap_or_else(|_| DEFAULT_MODELS.into()));
        if models.is_empty() {
            anyhow::bail!("MODELS must name at least one model");
        }

        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.into()));
        let liveness_file = env::var("LIVENESS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join(LIVENESS_FILE_NAME));

        let log_format = match env::var("LOG_FORMAT").unwrap_or_default().to_lowercase().as_str() {
            "" | "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => anyhow::bail!("LOG_FORMAT must be `text` or `json`, got `{other}`"),
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".into())
                .parse()?,
            data_dir,
            dashboard_dir: PathBuf::from(
                env::var("DASHBOARD_DIR").unwrap_or_else(|_| DEFAULT_DASHBOARD_DIR.into()),
            ),
            liveness_file,
            models,
            log_format,
        })
    }

    /// Config rooted at `base`, using the default layout and model set.
    pub fn with_base_dir(base: &Path) -> Self {
        let data_dir = base.join(DEFAULT_DATA_DIR);
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            liveness_file: data_dir.join(LIVENESS_FILE_NAME),
            data_dir,
            dashboard_dir: base.join(DEFAULT_DASHBOARD_DIR),
            models: parse_models(DEFAULT_MODELS),
            log_format: LogFormat::Text,
        }
    }

    /// Returns true if `name` is one of the configured models.
    pub fn has_model(&self, name: &str) -> bool {
        self.models.iter().any(|m| m == name)
    }
}

/// Split a comma-separated model list, dropping blanks and repeats while
/// keeping the first-seen order.
fn parse_models(raw: &str) -> Vec<String> {
    let mut models: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !models.iter().any(|m| m == name) {
            models.push(name.to_string());
        }
    }
    models
}
