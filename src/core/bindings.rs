use crate::dom::{Dom, NodeId};
use std::collections::{BTreeMap, HashSet};

pub const NAME_ID: &str = "name";
pub const TITLE_ID: &str = "title";
pub const BIO_ID: &str = "bio";
pub const EXPERIENCE_ID: &str = "experience";
pub const SKILLS_GRID_ID: &str = "skills-grid";
pub const NAV_NAME_ID: &str = "nav-name";
pub const CONTACT_ACTION_ID: &str = "contact-action";
pub const RESUME_ACTION_ID: &str = "resume-action";

const SECTION_TITLE_SUFFIX: &str = "-title";
const SECTION_ITEMS_SUFFIX: &str = "-items";

/// 語意欄位到節點的對照表，從文件建立一次後傳給 hydrator。
/// 文件中不存在的節點為 `None`。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    pub name: Option<NodeId>,
    pub title: Option<NodeId>,
    pub bio: Option<NodeId>,
    pub experience: Option<NodeId>,
    pub skills_grid: Option<NodeId>,
    pub nav_name: Option<NodeId>,
    pub contact_action: Option<NodeId>,
    pub resume_action: Option<NodeId>,
    pub(crate) sections: BTreeMap<String, SectionBinding>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionBinding {
    pub title: Option<NodeId>,
    pub items: Option<NodeId>,
}

impl Bindings {
    pub fn scan<D: Dom + ?Sized>(dom: &D) -> Self {
        Self::from_ids(dom.element_ids())
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: HashSet<String> = ids.into_iter().map(|id| id.as_ref().to_string()).collect();
        let lookup = |id: &str| ids.contains(id).then(|| NodeId::new(id));

        let mut sections: BTreeMap<String, SectionBinding> = BTreeMap::new();
        for id in &ids {
            if let Some(key) = id.strip_suffix(SECTION_TITLE_SUFFIX) {
                sections.entry(key.to_string()).or_default().title = Some(NodeId::new(id.as_str()));
            } else if let Some(key) = id.strip_suffix(SECTION_ITEMS_SUFFIX) {
                sections.entry(key.to_string()).or_default().items = Some(NodeId::new(id.as_str()));
            }
        }

        Self {
            name: lookup(NAME_ID),
            title: lookup(TITLE_ID),
            bio: lookup(BIO_ID),
            experience: lookup(EXPERIENCE_ID),
            skills_grid: lookup(SKILLS_GRID_ID),
            nav_name: lookup(NAV_NAME_ID),
            contact_action: lookup(CONTACT_ACTION_ID),
            resume_action: lookup(RESUME_ACTION_ID),
            sections,
        }
    }

    /// `{key}-title` / `{key}-items` 的節點
    pub fn section(&self, key: &str) -> Option<&SectionBinding> {
        self.sections.get(key)
    }

    pub fn section_keys(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}
