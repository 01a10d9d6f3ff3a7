use crate::core::ConfigProvider;
use crate::domain::model::{ContactAction, ResumeAction};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_email, validate_file_extension, validate_path, validate_profile_location,
    validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub site: Option<SiteInfo>,
    pub source: SourceConfig,
    pub template: TemplateConfig,
    pub output: OutputConfig,
    pub actions: Option<ActionsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_profile")]
    pub profile: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default = "default_site_dir")]
    pub site_dir: String,
    #[serde(default = "default_template")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    #[serde(default = "default_template")]
    pub file: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionsConfig {
    pub contact: Option<ContactAction>,
    pub resume: Option<ResumeAction>,
}

fn default_profile() -> String {
    "info.json".to_string()
}

fn default_site_dir() -> String {
    ".".to_string()
}

fn default_template() -> String {
    "index.html".to_string()
}

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTACT_EMAIL})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn site_name(&self) -> Option<&str> {
        self.site.as_ref().map(|site| site.name.as_str())
    }
}

impl ConfigProvider for TomlConfig {
    fn site_dir(&self) -> &str {
        &self.template.site_dir
    }

    fn profile_location(&self) -> &str {
        &self.source.profile
    }

    fn template_path(&self) -> &str {
        &self.template.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_file(&self) -> &str {
        &self.output.file
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds())
    }

    fn contact_action(&self) -> Option<ContactAction> {
        self.actions.as_ref().and_then(|a| a.contact.clone())
    }

    fn resume_action(&self) -> Option<ResumeAction> {
        self.actions.as_ref().and_then(|a| a.resume.clone())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_profile_location("source.profile", &self.source.profile)?;
        validate_range("source.timeout_seconds", self.timeout_seconds(), 1, 300)?;
        validate_path("template.site_dir", &self.template.site_dir)?;
        validate_path("template.path", &self.template.path)?;
        validate_file_extension("template.path", &self.template.path, &["html", "htm"])?;
        validate_path("output.path", &self.output.path)?;
        validate_path("output.file", &self.output.file)?;

        if let Some(contact) = self.contact_action() {
            validate_email("actions.contact.email", &contact.email)?;
        }
        if let Some(resume) = self.resume_action() {
            validate_path("actions.resume.path", &resume.path)?;
        }

        Ok(())
    }
}
