use crate::domain::model::Fragment;
use regex::Regex;
use std::sync::LazyLock;

// `[X]` with non-empty X; `[]` and unmatched brackets stay literal
static BRACKET_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("bracket pattern is valid"));

/// 把 experience 字串拆成一般文字與強調片段，方括號本身移除
pub fn split_highlights(text: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut last = 0;

    for caps in BRACKET_GROUP.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            fragments.push(Fragment::Text(text[last..whole.start()].to_string()));
        }
        fragments.push(Fragment::Highlight(inner.as_str().to_string()));
        last = whole.end();
    }

    if last < text.len() {
        fragments.push(Fragment::Text(text[last..].to_string()));
    }

    fragments
}
