use crate::prelude::*;

pub struct ExperienceRenderer;

#[async_trait]
impl SectionRenderer for ExperienceRenderer {
    fn resource(&self) -> &'static str { EXPERIENCE_FILE }

    async fn render(&self, data_dir: &Path, document: &SharedDocument) -> FolioResult {
        let data: ExperienceData = load_json(data_dir.join(self.resource())).await?;

        let mut markup = String::from("<h3>Experience</h3>");
        for entry in &data.experience {
            markup += &format!(
                r#"<div class="card">
    <div class="card-header">
        <div class="card-time">{}</div>
        <div class="card-content">
            <div class="card-title">{} <span class="link-icon">&#8599;</span></div>
            <div class="card-description">{}</div>
            <div class="tags">{}</div>
        </div>
    </div>
</div>"#,
                html_escape(&entry.year),
                html_escape(&entry.title),
                html_escape(&entry.description),
                tag_spans(&entry.tags),
            );
        }

        document.write().set_markup(containers::EXPERIENCE, markup)?;
        Ok(())
    }
}
