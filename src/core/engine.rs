use crate::core::SitePipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub output_path: String,
    /// false 表示 profile 無法取得，輸出的是模板的靜態內容
    pub hydrated: bool,
    pub document_title: Option<String>,
}

pub struct SiteEngine<P: SitePipeline> {
    pipeline: P,
}

impl<P: SitePipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Starting portfolio hydration");

        let template = self.pipeline.load_template().await?;

        // profile 失敗只記錄，不中斷：頁面退回模板的靜態內容
        let profile = match self.pipeline.fetch_profile().await {
            Ok(profile) => {
                tracing::info!(
                    "Loaded profile for {} ({} skills, {} sections)",
                    profile.name,
                    profile.skills.len(),
                    profile.sections.len()
                );
                Some(profile)
            }
            Err(e) => {
                tracing::error!("Error loading portfolio data: {}", e);
                tracing::warn!("Using default content from template");
                None
            }
        };

        let page = self.pipeline.hydrate(template, profile.as_ref())?;
        let hydrated = page.hydrated;
        let document_title = page.document_title.clone();

        let output_path = self.pipeline.publish(page).await?;
        tracing::info!("Page saved to: {}", output_path);

        Ok(RunReport {
            output_path,
            hydrated,
            document_title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{HydratedPage, Profile};
    use crate::utils::error::{FetchError, SiteError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubPipeline {
        profile: Option<Profile>,
        published: Mutex<Vec<String>>,
    }

    impl StubPipeline {
        fn new(profile: Option<Profile>) -> Self {
            Self {
                profile,
                published: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SitePipeline for StubPipeline {
        async fn load_template(&self) -> Result<String> {
            Ok("<p id=\"name\">static</p>".to_string())
        }

        async fn fetch_profile(&self) -> std::result::Result<Profile, FetchError> {
            self.profile.clone().ok_or_else(|| {
                FetchError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "info.json",
                ))
            })
        }

        fn hydrate(&self, template: String, profile: Option<&Profile>) -> Result<HydratedPage> {
            Ok(HydratedPage {
                html: match profile {
                    Some(profile) => format!("<p id=\"name\">{}</p>", profile.name),
                    None => template,
                },
                hydrated: profile.is_some(),
                document_title: profile.map(Profile::document_title),
            })
        }

        async fn publish(&self, page: HydratedPage) -> Result<String> {
            self.published.lock().unwrap().push(page.html);
            Ok("out/index.html".to_string())
        }
    }

    struct BrokenTemplate;

    #[async_trait]
    impl SitePipeline for BrokenTemplate {
        async fn load_template(&self) -> Result<String> {
            Err(SiteError::TemplateError {
                message: "missing".to_string(),
            })
        }

        async fn fetch_profile(&self) -> std::result::Result<Profile, FetchError> {
            Ok(Profile::default())
        }

        fn hydrate(&self, _template: String, _profile: Option<&Profile>) -> Result<HydratedPage> {
            unreachable!("hydrate runs only after the template loads")
        }

        async fn publish(&self, _page: HydratedPage) -> Result<String> {
            unreachable!("publish runs only after hydrate")
        }
    }

    #[tokio::test]
    async fn test_run_with_profile() {
        let profile = Profile {
            name: "Ana".to_string(),
            title: "Engineer".to_string(),
            ..Profile::default()
        };
        let engine = SiteEngine::new(StubPipeline::new(Some(profile)));

        let report = engine.run().await.unwrap();

        assert!(report.hydrated);
        assert_eq!(report.document_title.as_deref(), Some("Ana - Engineer"));
        assert_eq!(report.output_path, "out/index.html");
        assert_eq!(
            *engine.pipeline.published.lock().unwrap(),
            vec!["<p id=\"name\">Ana</p>"]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_publishes_static_template() {
        let engine = SiteEngine::new(StubPipeline::new(None));

        let report = engine.run().await.unwrap();

        assert!(!report.hydrated);
        assert!(report.document_title.is_none());
        assert_eq!(
            *engine.pipeline.published.lock().unwrap(),
            vec!["<p id=\"name\">static</p>"]
        );
    }

    #[tokio::test]
    async fn test_template_errors_are_not_swallowed() {
        let engine = SiteEngine::new(BrokenTemplate);
        let err = engine.run().await.unwrap_err();
        assert!(matches!(err, SiteError::TemplateError { .. }));
    }
}
