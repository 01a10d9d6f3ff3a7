pub mod html;
pub mod memory;

use crate::domain::model::{ChildElement, Fragment};

pub use html::HtmlDocument;
pub use memory::{MemoryDom, MemoryNode, NodeContent};

/// 已確認存在於文件中的元素 id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// hydrator 寫入的目標。寫入不會失敗；不存在的節點在建立 Bindings 時就被排除。
pub trait Dom {
    /// 文件中所有帶 id 的元素，依文件順序
    fn element_ids(&self) -> Vec<String>;

    /// 以純文字取代內容，不解讀 HTML
    fn set_text(&mut self, node: &NodeId, text: &str);

    /// 以 experience 片段取代內容
    fn set_fragments(&mut self, node: &NodeId, fragments: &[Fragment]);

    /// 清空子元素後依序插入
    fn replace_children(&mut self, node: &NodeId, children: Vec<ChildElement>);

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str);

    fn set_document_title(&mut self, title: &str);
}

pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_fragments(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|fragment| match fragment {
            Fragment::Text(text) => escape_text(text),
            Fragment::Highlight(text) => {
                format!(r#"<span class="highlight">{}</span>"#, escape_text(text))
            }
        })
        .collect()
}

pub fn render_children(children: &[ChildElement]) -> String {
    children
        .iter()
        .map(|child| match child.class {
            Some(class) => format!(
                r#"<{tag} class="{class}">{text}</{tag}>"#,
                tag = child.tag,
                class = class,
                text = escape_text(&child.text)
            ),
            None => format!(
                "<{tag}>{text}</{tag}>",
                tag = child.tag,
                text = escape_text(&child.text)
            ),
        })
        .collect()
}
