pub mod cli;
pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use crate::core::ConfigProvider;
    use crate::domain::model::{
        default_contact_body, default_contact_subject, ContactAction, ResumeAction,
    };
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_email, validate_file_extension, validate_path, validate_profile_location,
        validate_range, Validate,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "folio-hydrate")]
    #[command(about = "Hydrate a portfolio page template from a JSON profile")]
    pub struct CliConfig {
        #[arg(long, default_value = ".", help = "Directory holding the template and local profile")]
        pub site_dir: String,

        #[arg(long, default_value = "info.json", help = "Profile URL or path relative to --site-dir")]
        pub profile: String,

        #[arg(long, default_value = "index.html")]
        pub template: String,

        #[arg(long, default_value = "./dist")]
        pub output_path: String,

        #[arg(long, default_value = "index.html")]
        pub output_file: String,

        #[arg(long, help = "TOML site file; replaces the other site flags")]
        pub config: Option<String>,

        #[arg(long, default_value = "10")]
        pub timeout_seconds: u64,

        #[arg(long)]
        pub contact_email: Option<String>,

        #[arg(long, default_value_t = default_contact_subject())]
        pub contact_subject: String,

        #[arg(long, default_value_t = default_contact_body())]
        pub contact_body: String,

        #[arg(long)]
        pub resume_path: Option<String>,

        #[arg(long)]
        pub resume_download_name: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,
    }

    impl ConfigProvider for CliConfig {
        fn site_dir(&self) -> &str {
            &self.site_dir
        }

        fn profile_location(&self) -> &str {
            &self.profile
        }

        fn template_path(&self) -> &str {
            &self.template
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_file(&self) -> &str {
            &self.output_file
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(self.timeout_seconds)
        }

        fn contact_action(&self) -> Option<ContactAction> {
            self.contact_email.as_ref().map(|email| ContactAction {
                email: email.clone(),
                subject: self.contact_subject.clone(),
                body: self.contact_body.clone(),
            })
        }

        fn resume_action(&self) -> Option<ResumeAction> {
            self.resume_path.as_ref().map(|path| ResumeAction {
                path: path.clone(),
                download_name: self.resume_download_name.clone(),
            })
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("site_dir", &self.site_dir)?;
            validate_profile_location("profile", &self.profile)?;
            validate_path("template", &self.template)?;
            validate_file_extension("template", &self.template, &["html", "htm"])?;
            validate_path("output_path", &self.output_path)?;
            validate_path("output_file", &self.output_file)?;
            validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
            if let Some(email) = &self.contact_email {
                validate_email("contact_email", email)?;
            }
            if let Some(path) = &self.resume_path {
                validate_path("resume_path", path)?;
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = CliConfig::parse_from(["folio-hydrate"]);

            assert_eq!(config.profile_location(), "info.json");
            assert_eq!(config.template_path(), "index.html");
            assert_eq!(config.output_path(), "./dist");
            assert_eq!(config.request_timeout(), Duration::from_secs(10));
            assert!(config.contact_action().is_none());
            assert!(config.resume_action().is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_actions_from_flags() {
            let config = CliConfig::parse_from([
                "folio-hydrate",
                "--contact-email",
                "ana@example.com",
                "--resume-path",
                "/MyResume.pdf",
                "--resume-download-name",
                "Ana_Resume.pdf",
            ]);

            let contact = config.contact_action().unwrap();
            assert_eq!(contact.email, "ana@example.com");
            assert_eq!(contact.subject, "Job Opportunity");

            let resume = config.resume_action().unwrap();
            assert_eq!(resume.download_name.as_deref(), Some("Ana_Resume.pdf"));
        }

        #[test]
        fn test_validation_rejects_bad_values() {
            let config =
                CliConfig::parse_from(["folio-hydrate", "--template", "index.md"]);
            assert!(config.validate().is_err());

            let config = CliConfig::parse_from(["folio-hydrate", "--timeout-seconds", "0"]);
            assert!(config.validate().is_err());

            let config = CliConfig::parse_from(["folio-hydrate", "--contact-email", "nobody"]);
            assert!(config.validate().is_err());
        }
    }
}
