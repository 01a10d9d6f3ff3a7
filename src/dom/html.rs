use super::{escape_text, render_children, render_fragments, Dom, NodeId};
use crate::domain::model::{ChildElement, Fragment};
use crate::utils::error::Result;
use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, RewriteStrSettings};
use std::collections::{BTreeMap, HashSet};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// 以 HTML 模板為底的文件。寫入先累積成待套用的修改，`render` 時一次串流改寫，
/// 未被修改的位元組原樣保留。
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    source: String,
    ids: Vec<String>,
    has_title: bool,
    has_head: bool,
    edits: BTreeMap<String, PendingEdit>,
    title: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct PendingEdit {
    content: Option<Content>,
    attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
enum Content {
    /// 由 lol_html 跳脫
    Text(String),
    Html(String),
}

impl HtmlDocument {
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let mut ids = Vec::new();
        let mut has_title = false;
        let mut has_head = false;

        rewrite_str(
            &source,
            RewriteStrSettings {
                element_content_handlers: vec![
                    element!("[id]", |el| {
                        if let Some(id) = el.get_attribute("id") {
                            ids.push(id);
                        }
                        Ok(())
                    }),
                    // 與 document.title 相同：第一個 HTML 的 title，不限於 <head> 內，
                    // svg 的 <title> 不算
                    element!("title", |el| {
                        if el.namespace_uri() == HTML_NAMESPACE {
                            has_title = true;
                        }
                        Ok(())
                    }),
                    element!("head", |_el| {
                        has_head = true;
                        Ok(())
                    }),
                ],
                ..RewriteStrSettings::default()
            },
        )?;

        tracing::debug!("Template parsed: {} elements with id", ids.len());

        Ok(Self {
            source,
            ids,
            has_title,
            has_head,
            edits: BTreeMap::new(),
            title: None,
        })
    }

    pub fn has_edits(&self) -> bool {
        !self.edits.is_empty() || self.title.is_some()
    }

    pub fn render(&self) -> Result<String> {
        if !self.has_edits() {
            return Ok(self.source.clone());
        }

        let edits = &self.edits;
        // 與 getElementById 相同：重複的 id 只改第一個
        let mut applied: HashSet<String> = HashSet::new();

        let mut handlers = vec![element!("[id]", |el| {
            let Some(id) = el.get_attribute("id") else {
                return Ok(());
            };
            if let Some(edit) = edits.get(&id) {
                if applied.insert(id) {
                    match &edit.content {
                        Some(Content::Text(text)) => el.set_inner_content(text, ContentType::Text),
                        Some(Content::Html(html)) => el.set_inner_content(html, ContentType::Html),
                        None => {}
                    }
                    for (name, value) in &edit.attributes {
                        el.set_attribute(name, value)?;
                    }
                }
            }
            Ok(())
        })];

        if let Some(title) = self.title.as_deref() {
            if self.has_title {
                let mut done = false;
                handlers.push(element!("title", move |el| {
                    if !done && el.namespace_uri() == HTML_NAMESPACE {
                        el.set_inner_content(title, ContentType::Text);
                        done = true;
                    }
                    Ok(())
                }));
            } else if self.has_head {
                handlers.push(element!("head", move |el| {
                    el.append(
                        &format!("<title>{}</title>", escape_text(title)),
                        ContentType::Html,
                    );
                    Ok(())
                }));
            } else {
                tracing::warn!("Template has no <title> or <head>; document title not written");
            }
        }

        let html = rewrite_str(
            &self.source,
            RewriteStrSettings {
                element_content_handlers: handlers,
                ..RewriteStrSettings::default()
            },
        )?;

        Ok(html)
    }

    fn edit_mut(&mut self, node: &NodeId) -> &mut PendingEdit {
        self.edits.entry(node.as_str().to_string()).or_default()
    }
}

impl Dom for HtmlDocument {
    fn element_ids(&self) -> Vec<String> {
        self.ids.clone()
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        self.edit_mut(node).content = Some(Content::Text(text.to_string()));
    }

    fn set_fragments(&mut self, node: &NodeId, fragments: &[Fragment]) {
        self.edit_mut(node).content = Some(Content::Html(render_fragments(fragments)));
    }

    fn replace_children(&mut self, node: &NodeId, children: Vec<ChildElement>) {
        self.edit_mut(node).content = Some(Content::Html(render_children(&children)));
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.edit_mut(node)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_document_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }
}
