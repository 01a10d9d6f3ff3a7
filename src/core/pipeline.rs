use crate::core::actions::apply_actions;
use crate::core::bindings::Bindings;
use crate::core::fetch::AnyProfileSource;
use crate::core::hydrate::apply_profile;
use crate::core::{ConfigProvider, ProfileSource, SitePipeline, Storage};
use crate::domain::model::{HydratedPage, Profile};
use crate::dom::HtmlDocument;
use crate::utils::error::{FetchError, Result, SiteError};

/// 讀取模板、取得 profile、套用到模板、寫出頁面
pub struct PortfolioPipeline<S: Storage + Clone, C: ConfigProvider> {
    site: S,
    output: S,
    config: C,
    source: AnyProfileSource<S>,
}

impl<S: Storage + Clone, C: ConfigProvider> PortfolioPipeline<S, C> {
    /// `site` 提供模板與本地 profile，`output` 接收產生的頁面
    pub fn new(site: S, output: S, config: C) -> Result<Self> {
        let source = AnyProfileSource::from_config(&config, site.clone())?;
        Ok(Self {
            site,
            output,
            config,
            source,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage + Clone, C: ConfigProvider> SitePipeline for PortfolioPipeline<S, C> {
    async fn load_template(&self) -> Result<String> {
        let path = self.config.template_path();
        tracing::debug!("Loading template: {}", path);
        let data = self.site.read_file(path).await?;
        String::from_utf8(data).map_err(|e| SiteError::TemplateError {
            message: format!("{} is not valid UTF-8: {}", path, e),
        })
    }

    async fn fetch_profile(&self) -> std::result::Result<Profile, FetchError> {
        self.source.fetch_profile().await
    }

    fn hydrate(&self, template: String, profile: Option<&Profile>) -> Result<HydratedPage> {
        let mut document = HtmlDocument::parse(template)?;
        let bindings = Bindings::scan(&document);

        let contact = self.config.contact_action();
        let resume = self.config.resume_action();
        let actions = apply_actions(contact.as_ref(), resume.as_ref(), &bindings, &mut document);
        tracing::debug!("Action anchors written: {}", actions);

        let document_title = profile.map(|profile| {
            let summary = apply_profile(profile, &bindings, &mut document);
            tracing::debug!(
                "Hydrated {} fields, {} skills, sections: {:?}",
                summary.fields_written,
                summary.skills_rendered,
                summary.sections_hydrated
            );
            if !summary.sections_skipped.is_empty() {
                tracing::debug!("Sections without placeholders: {:?}", summary.sections_skipped);
            }
            profile.document_title()
        });

        Ok(HydratedPage {
            html: document.render()?,
            hydrated: profile.is_some(),
            document_title,
        })
    }

    async fn publish(&self, page: HydratedPage) -> Result<String> {
        let file = self.config.output_file();
        let output_path = format!("{}/{}", self.config.output_path(), file);

        tracing::debug!("Writing page ({} bytes) to storage", page.html.len());
        self.output.write_file(file, page.html.as_bytes()).await?;

        Ok(output_path)
    }
}
