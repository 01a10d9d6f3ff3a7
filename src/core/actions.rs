use crate::core::bindings::Bindings;
use crate::domain::model::{ContactAction, ResumeAction};
use crate::dom::Dom;

const WEBMAIL_COMPOSE_URL: &str = "https://mail.google.com/mail/?view=cm&fs=1";

impl ContactAction {
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.email,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }

    /// mail client 沒反應時的網頁郵件撰寫連結
    pub fn webmail_uri(&self) -> String {
        format!(
            "{}&to={}&su={}&body={}",
            WEBMAIL_COMPOSE_URL,
            self.email,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// 把聯絡與履歷動作寫到對應的錨點上，回傳寫入的錨點數量。
/// 未設定的動作或不存在的錨點直接略過。
pub fn apply_actions<D: Dom + ?Sized>(
    contact: Option<&ContactAction>,
    resume: Option<&ResumeAction>,
    bindings: &Bindings,
    dom: &mut D,
) -> usize {
    let mut written = 0;

    if let (Some(action), Some(node)) = (contact, &bindings.contact_action) {
        dom.set_attribute(node, "href", &action.mailto_uri());
        dom.set_attribute(node, "data-webmail-href", &action.webmail_uri());
        written += 1;
    }

    if let (Some(action), Some(node)) = (resume, &bindings.resume_action) {
        dom.set_attribute(node, "href", &action.path);
        dom.set_attribute(node, "target", "_blank");
        dom.set_attribute(node, "rel", "noopener");
        if let Some(download_name) = &action.download_name {
            dom.set_attribute(node, "download", download_name);
        }
        written += 1;
    }

    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;

    fn contact() -> ContactAction {
        ContactAction {
            email: "ana@example.com".to_string(),
            subject: "Job Opportunity".to_string(),
            body: "Hello Ana, let's talk & build.".to_string(),
        }
    }

    #[test]
    fn test_mailto_uri_encodes_subject_and_body() {
        assert_eq!(
            contact().mailto_uri(),
            "mailto:ana@example.com?subject=Job%20Opportunity&body=Hello%20Ana%2C%20let%27s%20talk%20%26%20build."
        );
    }

    #[test]
    fn test_webmail_uri() {
        let uri = contact().webmail_uri();
        assert!(uri.starts_with("https://mail.google.com/mail/?view=cm&fs=1&to=ana@example.com&su=Job%20Opportunity"));
        assert!(uri.ends_with("&body=Hello%20Ana%2C%20let%27s%20talk%20%26%20build."));
    }

    #[test]
    fn test_apply_actions_sets_anchor_attributes() {
        let mut dom = MemoryDom::with_nodes(["contact-action", "resume-action"]);
        let bindings = Bindings::scan(&dom);
        let resume = ResumeAction {
            path: "/MyResume.pdf".to_string(),
            download_name: Some("Ana_Resume.pdf".to_string()),
        };

        let written = apply_actions(Some(&contact()), Some(&resume), &bindings, &mut dom);

        assert_eq!(written, 2);
        assert!(dom
            .attribute("contact-action", "href")
            .unwrap()
            .starts_with("mailto:ana@example.com?"));
        assert!(dom
            .attribute("contact-action", "data-webmail-href")
            .unwrap()
            .starts_with("https://mail.google.com/"));
        assert_eq!(dom.attribute("resume-action", "href"), Some("/MyResume.pdf"));
        assert_eq!(dom.attribute("resume-action", "target"), Some("_blank"));
        assert_eq!(dom.attribute("resume-action", "download"), Some("Ana_Resume.pdf"));
    }

    #[test]
    fn test_unconfigured_or_unbound_actions_are_skipped() {
        let mut dom = MemoryDom::with_nodes(["resume-action"]);
        let bindings = Bindings::scan(&dom);

        assert_eq!(apply_actions(Some(&contact()), None, &bindings, &mut dom), 0);
        assert!(dom.attribute("resume-action", "href").is_none());
    }

    #[test]
    fn test_resume_without_download_name() {
        let mut dom = MemoryDom::with_nodes(["resume-action"]);
        let bindings = Bindings::scan(&dom);
        let resume = ResumeAction {
            path: "resume.pdf".to_string(),
            download_name: None,
        };

        apply_actions(None, Some(&resume), &bindings, &mut dom);

        assert!(dom.attribute("resume-action", "download").is_none());
    }
}
