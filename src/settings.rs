use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, path::PathBuf, str::FromStr};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    /// SQLite file holding the `projects` table.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Directory the HTML pages and the css/, images/, resume/ folders live in.
    #[serde(default = "default_site_root")]
    pub site_root: String,

    /// Preferred file name for `/resume.pdf`; `resume.pdf` is tried after it.
    #[serde(default = "default_resume_file")]
    pub resume_file: String,

    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,

    #[serde(default)]
    pub log_json: bool,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Site".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_database_path() -> String {
    "projects.db".to_string()
}
fn default_site_root() -> String {
    ".".to_string()
}
fn default_resume_file() -> String {
    "Resume.pdf".to_string()
}
fn default_seed_sample_data() -> bool {
    true
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.database_path.trim().is_empty() {
            errors.push("DATABASE_PATH cannot be empty");
        }
        if self.site_root.trim().is_empty() {
            errors.push("SITE_ROOT cannot be empty");
        }
        if self.worker_count == 0 {
            errors.push("WORKER_COUNT must be at least 1");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.database_path)
    }

    pub fn site_root(&self) -> PathBuf {
        PathBuf::from(&self.site_root)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
