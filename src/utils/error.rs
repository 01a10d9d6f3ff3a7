use thiserror::Error;

/// 取得 profile 失敗的唯一可恢復錯誤：資源不可用或格式錯誤
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Profile request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Profile request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Profile file could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Profile unavailable: {0}")]
    FetchError(#[from] FetchError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Template rewrite failed: {0}")]
    RewriteError(#[from] lol_html::errors::RewritingError),

    #[error("Template error: {message}")]
    TemplateError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SiteError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::FetchError(_) => "The profile could not be loaded".to_string(),
            SiteError::IoError(e) => format!("A file could not be read or written: {}", e),
            SiteError::RewriteError(_) | SiteError::TemplateError { .. } => {
                "The page template could not be processed".to_string()
            }
            SiteError::ConfigError { message } => format!("Invalid configuration: {}", message),
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::FetchError(_) => "Check the profile location and that it contains valid JSON",
            SiteError::IoError(_) => "Check that the site directory exists and the output path is writable",
            SiteError::RewriteError(_) | SiteError::TemplateError { .. } => {
                "Check that the template is well-formed HTML"
            }
            SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. } => {
                "Review the command-line flags or the TOML site file"
            }
        }
    }

    /// CLI 結束碼：設定錯誤 2，其餘 1
    pub fn exit_code(&self) -> i32 {
        match self {
            SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_exit_with_two() {
        let err = SiteError::InvalidConfigValueError {
            field: "source.profile".to_string(),
            value: "".to_string(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("source.profile"));
    }

    #[test]
    fn test_fetch_error_wraps_into_site_error() {
        let fetch = FetchError::Status {
            url: "http://localhost/info.json".to_string(),
            status: 404,
        };
        let err: SiteError = fetch.into();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("404"));
    }
}
