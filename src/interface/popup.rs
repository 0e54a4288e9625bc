use crate::prelude::*;

/// what the popup shows once a project's blog was resolved
#[derive(Clone, Debug, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub image: String,
    /// html rendered from the blog's markdown body
    pub body: String,
}

/// modal shown when a project card with a linked blog entry is clicked.
/// projects reference blogs by id; a dangling reference makes the
/// click a no-op
pub struct ProjectPopup {
    projects: Vec<Project>,
    blogs: Vec<Blog>,

    visible: bool,
    content: Option<PopupContent>,
}
impl ProjectPopup {
    pub fn new(projects: Vec<Project>, blogs: Vec<Blog>) -> Self {
        Self {
            projects,
            blogs,
            visible: false,
            content: None,
        }
    }

    pub fn is_visible(&self) -> bool { self.visible }
    pub fn content(&self) -> Option<&PopupContent> { self.content.as_ref() }

    /// click on the project card at `index`. returns whether the popup
    /// was shown
    pub fn card_clicked(&mut self, index: usize) -> bool {
        let Some(project) = self.projects.get(index) else { return false };
        let Some(blog_id) = &project.blog_id else { return false };
        let Some(blog) = self.blogs.iter().find(|b| &b.id == blog_id) else { return false };

        self.content = Some(PopupContent {
            title: blog.title.clone(),
            image: project.image.clone(),
            body: markdown_to_html(&blog.content),
        });
        self.visible = true;
        true
    }

    pub fn close_clicked(&mut self) {
        self.visible = false;
    }

    /// clicking the backdrop (not the modal itself) also dismisses
    pub fn backdrop_clicked(&mut self) {
        self.visible = false;
    }
}


/// the rich text collaborator: blog bodies are markdown
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = pulldown_cmark::Parser::new(markdown);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}


#[cfg(test)]
mod tests {
    use super::*;

    fn project(blog_id: Option<&str>) -> Project {
        Project {
            title: "proj".to_owned(),
            description: "desc".to_owned(),
            image: "img.png".to_owned(),
            tags: vec![],
            blog_id: blog_id.map(String::from),
        }
    }

    fn blog(id: &str) -> Blog {
        Blog {
            id: id.to_owned(),
            title: "T".to_owned(),
            content: "# H".to_owned(),
        }
    }

    #[test]
    fn click_resolves_the_cross_reference() {
        let mut popup = ProjectPopup::new(vec![project(Some("p1"))], vec![blog("p1")]);

        assert!(popup.card_clicked(0));
        assert!(popup.is_visible());

        let content = popup.content().unwrap();
        assert_eq!(content.title, "T");
        assert_eq!(content.image, "img.png");
        assert!(content.body.contains("<h1>H</h1>"));
    }

    #[test]
    fn dangling_reference_is_a_no_op() {
        let mut popup = ProjectPopup::new(vec![project(Some("nope"))], vec![blog("p1")]);

        assert!(!popup.card_clicked(0));
        assert!(!popup.is_visible());
        assert!(popup.content().is_none());
    }

    #[test]
    fn project_without_a_blog_is_a_no_op() {
        let mut popup = ProjectPopup::new(vec![project(None)], vec![blog("p1")]);
        assert!(!popup.card_clicked(0));
        assert!(!popup.is_visible());
    }

    #[test]
    fn unknown_index_is_a_no_op() {
        let mut popup = ProjectPopup::new(vec![], vec![blog("p1")]);
        assert!(!popup.card_clicked(3));
    }

    #[test]
    fn close_and_backdrop_dismiss() {
        let mut popup = ProjectPopup::new(vec![project(Some("p1"))], vec![blog("p1")]);

        assert!(popup.card_clicked(0));
        popup.close_clicked();
        assert!(!popup.is_visible());

        assert!(popup.card_clicked(0));
        popup.backdrop_clicked();
        assert!(!popup.is_visible());
    }
}
