use crate::prelude::*;

pub struct AboutRenderer;

#[async_trait]
impl SectionRenderer for AboutRenderer {
    fn resource(&self) -> &'static str { ABOUT_FILE }

    async fn render(&self, data_dir: &Path, document: &SharedDocument) -> FolioResult {
        let data: AboutData = load_json(data_dir.join(self.resource())).await?;

        let mut markup = String::new();
        for paragraph in &data.paragraphs {
            markup += &format!(r#"<p style="margin-bottom:16px; ">{}</p>"#, html_escape(paragraph));
        }

        document.write().set_markup(containers::ABOUT, markup)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::test_util::write_data_file;

    #[tokio::test]
    async fn one_paragraph_per_entry_in_order() {
        let dir = write_data_file(
            "about-basic",
            ABOUT_FILE,
            r#"{ "paragraphs": ["first", "second"] }"#,
        );

        let document: SharedDocument = Default::default();
        AboutRenderer.render(&dir, &document).await.unwrap();

        let document = document.read();
        let about = document.get(containers::ABOUT).unwrap();
        assert_eq!(about.matches("<p").count(), 2);
        assert!(about.find("first").unwrap() < about.find("second").unwrap());
    }
}
