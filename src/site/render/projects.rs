use crate::prelude::*;

pub struct ProjectsRenderer;

#[async_trait]
impl SectionRenderer for ProjectsRenderer {
    fn resource(&self) -> &'static str { PROJECTS_FILE }

    async fn render(&self, data_dir: &Path, document: &SharedDocument) -> FolioResult {
        let data: ProjectsData = load_json(data_dir.join(self.resource())).await?;

        let mut markup = String::from("<h3>Projects</h3>");
        for (index, project) in data.projects.iter().enumerate() {
            markup += &format!(
                r#"<div class="card project-card" data-index="{index}">
    <div class="card-header">
        <div class="project-image">
            <img src="{}" alt="{}">
        </div>
        <div class="card-content">
            <div class="card-title">{}</div>
            <div class="card-description">{}</div>
            <div class="tags">{}</div>
        </div>
    </div>
</div>"#,
                html_escape(&project.image),
                html_escape(&project.title),
                html_escape(&project.title),
                html_escape(&project.description),
                tag_spans(&project.tags),
            );
        }

        document.write().set_markup(containers::PROJECTS, markup)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::test_util::write_data_file;

    #[tokio::test]
    async fn cards_are_indexed_in_source_order() {
        let dir = write_data_file(
            "projects-basic",
            PROJECTS_FILE,
            r#"{ "projects": [
                { "title": "One", "description": "d", "image": "a.png", "tags": ["x"], "blogId": "p1" },
                { "title": "Two", "description": "d" }
            ] }"#,
        );

        let document: SharedDocument = Default::default();
        ProjectsRenderer.render(&dir, &document).await.unwrap();

        let document = document.read();
        let section = document.get(containers::PROJECTS).unwrap();
        assert!(section.starts_with("<h3>Projects</h3>"));
        assert!(section.contains(r#"data-index="0""#));
        assert!(section.contains(r#"data-index="1""#));
        assert!(section.contains(r#"<img src="a.png" alt="One">"#));

        // missing image falls back to an empty src
        assert!(section.contains(r#"<img src="" alt="Two">"#));
    }
}
