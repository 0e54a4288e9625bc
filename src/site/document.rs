use crate::prelude::*;

/// attachment point names the surrounding document supplies
pub mod containers {
    pub const HEADER_NAME: &str = "header-name";
    pub const HEADER_TITLE: &str = "header-title";
    pub const HEADER_DESCRIPTION: &str = "header-description";
    pub const NAV: &str = "nav";
    pub const SOCIAL_LINKS: &str = "social-links";
    pub const ABOUT: &str = "about";
    pub const EXPERIENCE: &str = "experience";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const PROJECTS: &str = "projects";
    pub const POPUP_TITLE: &str = "popup-title";
    pub const POPUP_IMAGE: &str = "popup-image";
    pub const POPUP_BODY: &str = "popup-body";

    pub const ALL: &[&str] = &[
        HEADER_NAME,
        HEADER_TITLE,
        HEADER_DESCRIPTION,
        NAV,
        SOCIAL_LINKS,
        ABOUT,
        EXPERIENCE,
        ACHIEVEMENTS,
        PROJECTS,
        POPUP_TITLE,
        POPUP_IMAGE,
        POPUP_BODY,
    ];
}

/// the set of named containers renderers write into. containers are
/// pre-existing collaborators; writing to an unknown name is an error
#[derive(Clone, Debug)]
pub struct Document {
    containers: HashMap<String, String>,
}
impl Document {
    pub fn new() -> Self {
        Self {
            containers: containers::ALL.iter().map(|name| (name.to_string(), String::new())).collect(),
        }
    }

    fn slot_mut(&mut self, name: &str) -> FolioResult<&mut String> {
        self.containers.get_mut(name).ok_or_else(|| FolioError::MissingContainer(name.to_owned()))
    }

    /// replace a container with escaped text
    pub fn set_text(&mut self, name: &str, text: &str) -> FolioResult {
        *self.slot_mut(name)? = html_escape(text);
        Ok(())
    }

    /// replace a container's markup wholesale
    pub fn set_markup(&mut self, name: &str, markup: String) -> FolioResult {
        *self.slot_mut(name)? = markup;
        Ok(())
    }

    pub fn append(&mut self, name: &str, markup: &str) -> FolioResult {
        self.slot_mut(name)?.push_str(markup);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.containers.get(name).map(String::as_str)
    }
}

impl Default for Document {
    fn default() -> Self { Self::new() }
}

pub type SharedDocument = Arc<RwLock<Document>>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped_markup_is_not() {
        let mut doc = Document::new();
        doc.set_text(containers::HEADER_NAME, "A <b>").unwrap();
        doc.set_markup(containers::NAV, "<a>Home</a>".to_owned()).unwrap();

        assert_eq!(doc.get(containers::HEADER_NAME), Some("A &lt;b&gt;"));
        assert_eq!(doc.get(containers::NAV), Some("<a>Home</a>"));
    }

    #[test]
    fn unknown_containers_are_errors() {
        let mut doc = Document::new();
        let result = doc.set_text("not-a-container", "x");
        assert!(matches!(result, Err(FolioError::MissingContainer(_))));
    }

    #[test]
    fn append_accumulates_in_order() {
        let mut doc = Document::new();
        doc.append(containers::ABOUT, "<p>a</p>").unwrap();
        doc.append(containers::ABOUT, "<p>b</p>").unwrap();
        assert_eq!(doc.get(containers::ABOUT), Some("<p>a</p><p>b</p>"));
    }
}
