use crate::core::bindings::Bindings;
use crate::core::highlight::split_highlights;
use crate::domain::model::{ChildElement, Profile};
use crate::dom::Dom;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HydrationSummary {
    pub fields_written: usize,
    pub skills_rendered: usize,
    pub sections_hydrated: Vec<String>,
    /// 文件中沒有對應節點的 section key
    pub sections_skipped: Vec<String>,
}

/// 將 profile 投影到模板節點上。單次線性寫入，同樣輸入重複執行結果相同。
pub fn apply_profile<D: Dom + ?Sized>(
    profile: &Profile,
    bindings: &Bindings,
    dom: &mut D,
) -> HydrationSummary {
    let mut summary = HydrationSummary::default();

    // Hero
    for (node, text) in [
        (&bindings.name, profile.name.as_str()),
        (&bindings.title, profile.title.as_str()),
        (&bindings.bio, profile.bio.as_str()),
    ] {
        if let Some(node) = node {
            dom.set_text(node, text);
            summary.fields_written += 1;
        }
    }

    if let Some(node) = &bindings.experience {
        dom.set_fragments(node, &split_highlights(&profile.experience));
        summary.fields_written += 1;
    }

    // Skills
    if let Some(node) = &bindings.skills_grid {
        let children: Vec<ChildElement> = profile
            .skills
            .iter()
            .map(|skill| ChildElement::skill(skill))
            .collect();
        summary.skills_rendered = children.len();
        dom.replace_children(node, children);
    }

    // Sections
    for (key, section) in &profile.sections {
        let Some(binding) = bindings.section(key) else {
            tracing::debug!("No placeholders for section '{}', skipping", key);
            summary.sections_skipped.push(key.clone());
            continue;
        };

        if let Some(node) = &binding.title {
            dom.set_text(node, &section.title);
        }
        if let Some(node) = &binding.items {
            dom.replace_children(
                node,
                section
                    .items
                    .iter()
                    .map(|item| ChildElement::list_item(item))
                    .collect(),
            );
        }
        summary.sections_hydrated.push(key.clone());
    }

    if let Some(node) = &bindings.nav_name {
        dom.set_text(node, &profile.name);
        summary.fields_written += 1;
    }

    dom.set_document_title(&profile.document_title());

    summary
}
