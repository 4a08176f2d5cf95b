use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for the daily rolling log file
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: default_log_dir(),
        }
    }
}

/// Server-side report generation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Try the remote service before the local engine
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_report_path")]
    pub report_path: String,
    #[serde(default = "default_activity_comment_path")]
    pub activity_comment_path: String,
    #[serde(default = "default_bgm_comment_path")]
    pub bgm_comment_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Bearer token sent with report requests
    #[serde(default)]
    pub auth_token: Option<String>,
}

fn default_endpoint() -> String {
    "http://localhost:8000".to_string()
}

pub(crate) fn default_report_path() -> String {
    "/psychology/report".to_string()
}

pub(crate) fn default_activity_comment_path() -> String {
    "/chat/activity-comment".to_string()
}

pub(crate) fn default_bgm_comment_path() -> String {
    "/chat/bgm-comment".to_string()
}

pub(crate) fn default_timeout_secs() -> u64 {
    10
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_endpoint(),
            report_path: default_report_path(),
            activity_comment_path: default_activity_comment_path(),
            bgm_comment_path: default_bgm_comment_path(),
            timeout_secs: default_timeout_secs(),
            auth_token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_reports_path")]
    pub reports_path: PathBuf,
    /// Pinned soundtrack per conversation file
    #[serde(default = "default_sessions_path")]
    pub sessions_path: PathBuf,
}

pub(crate) fn default_reports_path() -> PathBuf {
    PathBuf::from("data/psychology_reports.json")
}

pub(crate) fn default_sessions_path() -> PathBuf {
    PathBuf::from("data/report_sessions.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            reports_path: default_reports_path(),
            sessions_path: default_sessions_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Used in templated text when no profile nickname is given
    #[serde(default = "default_nickname")]
    pub default_nickname: String,
    /// A conversation shrinking below this share of its previous length is a new session
    #[serde(default = "default_new_session_ratio")]
    pub new_session_ratio: f64,
    /// Score above which mood-specific suggestions apply to locally generated reports
    #[serde(default = "default_local_suggestion_band")]
    pub local_suggestion_band: f64,
    /// Same band for reports normalized from the remote service
    #[serde(default = "default_remote_suggestion_band")]
    pub remote_suggestion_band: f64,
}

pub(crate) fn default_nickname() -> String {
    "사용자".to_string()
}

pub(crate) fn default_new_session_ratio() -> f64 {
    0.5
}

pub(crate) fn default_local_suggestion_band() -> f64 {
    20.0
}

pub(crate) fn default_remote_suggestion_band() -> f64 {
    30.0
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_nickname: default_nickname(),
            new_session_ratio: default_new_session_ratio(),
            local_suggestion_band: default_local_suggestion_band(),
            remote_suggestion_band: default_remote_suggestion_band(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            tracing::warn!("Using config.example.toml. Create config.toml for local settings.");
            Self::from_file("config.example.toml")
        } else {
            tracing::debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    fn validate(&self) -> crate::Result<()> {
        let ratio = self.report.new_session_ratio;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(crate::MoodLensError::Config(format!(
                "report.new_session_ratio must be within 0..=1, got {ratio}"
            )));
        }
        if self.remote.enabled && self.remote.endpoint.trim().is_empty() {
            return Err(crate::MoodLensError::Config(
                "remote.endpoint is required when remote.enabled = true".to_string(),
            ));
        }
        Ok(())
    }

    /// Check if remote report generation is enabled
    pub fn remote_enabled(&self) -> bool {
        self.remote.enabled
    }

    /// Full URL of the remote report endpoint
    pub fn remote_report_url(&self) -> String {
        join_url(&self.remote.endpoint, &self.remote.report_path)
    }

    /// Full URL of the remote activity comment endpoint
    pub fn remote_activity_comment_url(&self) -> String {
        join_url(&self.remote.endpoint, &self.remote.activity_comment_path)
    }

    /// Full URL of the remote soundtrack comment endpoint
    pub fn remote_bgm_comment_url(&self) -> String {
        join_url(&self.remote.endpoint, &self.remote.bgm_comment_path)
    }

    pub fn remote_timeout_secs(&self) -> u64 {
        self.remote.timeout_secs
    }

    /// Get the saved report list location
    pub fn reports_path(&self) -> &Path {
        &self.storage.reports_path
    }

    pub fn sessions_path(&self) -> &Path {
        &self.storage.sessions_path
    }

    pub fn default_nickname(&self) -> &str {
        &self.report.default_nickname
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
