use crate::prelude::*;

pub struct AchievementsRenderer;

#[async_trait]
impl SectionRenderer for AchievementsRenderer {
    fn resource(&self) -> &'static str { ACHIEVEMENTS_FILE }

    async fn render(&self, data_dir: &Path, document: &SharedDocument) -> FolioResult {
        let data: AchievementsData = load_json(data_dir.join(self.resource())).await?;

        let mut markup = String::from("<h3>Achievements</h3>");
        for (index, achievement) in data.achievements.iter().enumerate() {
            // data attributes feed the easter egg engine and hover image
            markup += &format!(
                r#"<div class="card achievement-card" data-index="{index}" data-easter-egg="{}" data-image="{}">
    <div class="card-header">
        <div class="card-time">{}</div>
        <div class="card-content">
            <div class="card-title">{}</div>
            <div class="card-description">{}</div>
            <div class="tags">{}</div>
        </div>
    </div>
</div>"#,
                html_escape(achievement.easter_egg.as_deref().unwrap_or("plain")),
                html_escape(achievement.image.as_deref().unwrap_or_default()),
                html_escape(&achievement.year),
                html_escape(&achievement.title),
                html_escape(&achievement.description),
                tag_spans(&achievement.tags),
            );
        }

        document.write().set_markup(containers::ACHIEVEMENTS, markup)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::test_util::write_data_file;

    #[tokio::test]
    async fn cards_carry_their_easter_egg_attributes() {
        let dir = write_data_file(
            "achievements-basic",
            ACHIEVEMENTS_FILE,
            r#"{ "achievements": [
                { "year": "2023", "title": "Won a thing", "description": "d", "easterEgg": "confetti", "image": "images/win.png" },
                { "year": "2021", "title": "Launched", "description": "d" }
            ] }"#,
        );

        let document: SharedDocument = Default::default();
        AchievementsRenderer.render(&dir, &document).await.unwrap();

        let document = document.read();
        let section = document.get(containers::ACHIEVEMENTS).unwrap();
        assert!(section.starts_with("<h3>Achievements</h3>"));
        assert!(section.contains(r#"data-index="0""#));
        assert!(section.contains(r#"data-easter-egg="confetti""#));
        assert!(section.contains(r#"data-image="images/win.png""#));

        // undeclared eggs degrade to plain
        assert!(section.contains(r#"data-index="1""#));
        assert!(section.contains(r#"data-easter-egg="plain""#));
    }
}
