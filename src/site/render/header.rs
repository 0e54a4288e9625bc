use crate::prelude::*;

pub struct HeaderRenderer;

#[async_trait]
impl SectionRenderer for HeaderRenderer {
    fn resource(&self) -> &'static str { HEADER_FILE }

    async fn render(&self, data_dir: &Path, document: &SharedDocument) -> FolioResult {
        let data: HeaderData = load_json(data_dir.join(self.resource())).await?;

        let mut nav = String::new();
        for item in &data.nav {
            nav += &format!(
                r##"<a href="#{}">{}</a>"##,
                html_escape(item),
                html_escape(&capitalize(item)),
            );
        }

        let mut socials = String::new();
        for social in &data.social {
            socials += &format!(
                r#"<a href="{}" target="_blank"><i class="{}"></i> {}</a>"#,
                html_escape(&social.url),
                icon_class(&social.label),
                html_escape(&social.label),
            );
        }

        let mut document = document.write();
        document.set_text(containers::HEADER_NAME, &data.name)?;
        document.set_text(containers::HEADER_TITLE, &data.title)?;
        document.set_text(containers::HEADER_DESCRIPTION, &data.description)?;
        document.set_markup(containers::NAV, nav)?;
        document.set_markup(containers::SOCIAL_LINKS, socials)?;

        Ok(())
    }
}
