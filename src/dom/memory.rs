use super::{escape_text, render_children, render_fragments, Dom, NodeId};
use crate::domain::model::{ChildElement, Fragment};
use std::collections::{BTreeMap, HashMap};

/// 測試用的假節點集合，不需要真正的文件
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    order: Vec<String>,
    nodes: HashMap<String, MemoryNode>,
    title: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryNode {
    pub content: NodeContent,
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    Text(String),
    Fragments(Vec<Fragment>),
    Children(Vec<ChildElement>),
}

impl Default for NodeContent {
    fn default() -> Self {
        NodeContent::Text(String::new())
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nodes<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dom = Self::new();
        for id in ids {
            dom.insert(id, "");
        }
        dom
    }

    /// 加入帶有靜態文字的節點（模擬模板的預設內容）
    pub fn insert(&mut self, id: impl Into<String>, text: &str) {
        let id = id.into();
        if !self.nodes.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.nodes.insert(
            id,
            MemoryNode {
                content: NodeContent::Text(text.to_string()),
                attributes: BTreeMap::new(),
            },
        );
    }

    pub fn insert_children(&mut self, id: impl Into<String>, children: Vec<ChildElement>) {
        let id = id.into();
        self.insert(id.clone(), "");
        if let Some(node) = self.nodes.get_mut(&id) {
            node.content = NodeContent::Children(children);
        }
    }

    pub fn node(&self, id: &str) -> Option<&MemoryNode> {
        self.nodes.get(id)
    }

    /// 節點的 textContent
    pub fn text(&self, id: &str) -> Option<String> {
        self.nodes.get(id).map(|node| match &node.content {
            NodeContent::Text(text) => text.clone(),
            NodeContent::Fragments(fragments) => fragments.iter().map(Fragment::text).collect(),
            NodeContent::Children(children) => {
                children.iter().map(|child| child.text.as_str()).collect()
            }
        })
    }

    /// 節點的 innerHTML
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.nodes.get(id).map(|node| match &node.content {
            NodeContent::Text(text) => escape_text(text),
            NodeContent::Fragments(fragments) => render_fragments(fragments),
            NodeContent::Children(children) => render_children(children),
        })
    }

    pub fn children(&self, id: &str) -> Option<&[ChildElement]> {
        match self.nodes.get(id).map(|node| &node.content) {
            Some(NodeContent::Children(children)) => Some(children),
            _ => None,
        }
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|node| node.attributes.get(name))
            .map(String::as_str)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn node_mut(&mut self, node: &NodeId) -> Option<&mut MemoryNode> {
        self.nodes.get_mut(node.as_str())
    }
}

impl Dom for MemoryDom {
    fn element_ids(&self) -> Vec<String> {
        self.order.clone()
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        if let Some(node) = self.node_mut(node) {
            node.content = NodeContent::Text(text.to_string());
        }
    }

    fn set_fragments(&mut self, node: &NodeId, fragments: &[Fragment]) {
        if let Some(node) = self.node_mut(node) {
            node.content = NodeContent::Fragments(fragments.to_vec());
        }
    }

    fn replace_children(&mut self, node: &NodeId, children: Vec<ChildElement>) {
        if let Some(node) = self.node_mut(node) {
            node.content = NodeContent::Children(children);
        }
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        if let Some(node) = self.node_mut(node) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_document_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}
