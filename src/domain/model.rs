use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 從 JSON 解碼的作品集內容。缺少的欄位以空值解碼，不做 schema 驗證。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    /// 可包含 `[Company]` 形式的強調片段
    pub experience: String,
    pub skills: Vec<String>,
    pub sections: BTreeMap<String, Section>,
}

impl Profile {
    pub fn from_json_slice(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }

    /// `{name} - {title}`
    pub fn document_title(&self) -> String {
        format!("{} - {}", self.name, self.title)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub title: String,
    pub items: Vec<String>,
}

/// experience 字串拆出的片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Highlight(String),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Text(text) | Fragment::Highlight(text) => text,
        }
    }
}

/// 清空容器後逐一插入的子元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildElement {
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub text: String,
}

impl ChildElement {
    pub fn skill(text: &str) -> Self {
        Self {
            tag: "div",
            class: Some("skill-item"),
            text: text.to_string(),
        }
    }

    pub fn list_item(text: &str) -> Self {
        Self {
            tag: "li",
            class: None,
            text: text.to_string(),
        }
    }
}

/// 「Get in Touch」按鈕：mailto 連結加上網頁郵件的備援連結
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactAction {
    pub email: String,
    #[serde(default = "default_contact_subject")]
    pub subject: String,
    #[serde(default = "default_contact_body")]
    pub body: String,
}

pub fn default_contact_subject() -> String {
    "Job Opportunity".to_string()
}

pub fn default_contact_body() -> String {
    "Hello, I would like to discuss a potential project with you.".to_string()
}

/// 「View Resume」按鈕：新分頁開啟，或以指定檔名下載
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAction {
    pub path: String,
    pub download_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HydratedPage {
    pub html: String,
    /// false 表示 profile 取得失敗，輸出的是模板原本的靜態內容
    pub hydrated: bool,
    pub document_title: Option<String>,
}
