use crate::domain::model::{ContactAction, HydratedPage, Profile, ResumeAction};
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// 模板與本地 profile 所在的目錄
    fn site_dir(&self) -> &str;
    /// http(s) URL，或相對於 site_dir 的路徑
    fn profile_location(&self) -> &str;
    fn template_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn contact_action(&self) -> Option<ContactAction>;
    fn resume_action(&self) -> Option<ResumeAction>;
}

/// 單次取得並解碼 profile，不重試
pub trait ProfileSource: Send + Sync {
    fn fetch_profile(
        &self,
    ) -> impl std::future::Future<Output = std::result::Result<Profile, FetchError>> + Send;
}

#[async_trait]
pub trait SitePipeline: Send + Sync {
    async fn load_template(&self) -> Result<String>;
    async fn fetch_profile(&self) -> std::result::Result<Profile, FetchError>;
    /// profile 為 None 時保留模板的靜態內容
    fn hydrate(&self, template: String, profile: Option<&Profile>) -> Result<HydratedPage>;
    async fn publish(&self, page: HydratedPage) -> Result<String>;
}
