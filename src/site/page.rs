use crate::prelude::*;

/// placeholder card geometry, used until the host reports real bounds
const CARD_SIZE: Vector2 = Vector2::new(600.0, 120.0);
const CARD_SPACING: f32 = 16.0;

/// the whole page: the shared document, the section renderers, the
/// popup and dropdown controllers, and the easter egg engine
pub struct Page {
    data_dir: PathBuf,
    document: SharedDocument,

    engine: Arc<RwLock<ParticleEngine>>,
    pub cursor: CursorImage,
    pub dropdown: ContactDropdown,

    /// wired once the projects section has rendered
    popup: Option<ProjectPopup>,

    /// hover targets, in achievement order
    cards: Vec<EasterEggCard>,
}
impl Page {
    pub fn new(data_dir: impl Into<PathBuf>, surface_size: Vector2) -> Self {
        Self {
            data_dir: data_dir.into(),
            document: SharedDocument::default(),
            engine: Arc::new(RwLock::new(ParticleEngine::new(ParticleSettings::default(), surface_size))),
            cursor: CursorImage::new(),
            dropdown: ContactDropdown::new(),
            popup: None,
            cards: Vec::new(),
        }
    }

    pub fn document(&self) -> &SharedDocument { &self.document }
    pub fn engine(&self) -> Arc<RwLock<ParticleEngine>> { self.engine.clone() }
    pub fn particle_count(&self) -> usize { self.engine.read().particle_count() }
    pub fn popup_visible(&self) -> bool { self.popup.as_ref().is_some_and(ProjectPopup::is_visible) }

    /// render every section. the five loads are independent and
    /// unordered; a failed section logs and stays unrendered without
    /// affecting the others
    pub async fn load(&mut self) -> FolioResult {
        let (header, about, experience, achievements, projects) = tokio::join!(
            HeaderRenderer.render(&self.data_dir, &self.document),
            AboutRenderer.render(&self.data_dir, &self.document),
            ExperienceRenderer.render(&self.data_dir, &self.document),
            AchievementsRenderer.render(&self.data_dir, &self.document),
            ProjectsRenderer.render(&self.data_dir, &self.document),
        );

        let _ = header.log_error_message("header section failed");
        let _ = about.log_error_message("about section failed");
        let _ = experience.log_error_message("experience section failed");

        // popup wiring needs the rendered project cards, so it is
        // sequenced after that render rather than joined with it
        if projects.log_error_message("projects section failed").is_ok() {
            let _ = self.wire_popup().await.log_error_message("popup wiring failed");
        }

        // same for the easter eggs and the achievement cards
        if achievements.log_error_message("achievements section failed").is_ok() {
            let _ = self.wire_easter_eggs().await.log_error_message("easter egg wiring failed");
        }

        info!("page loaded, {} hover cards", self.cards.len());
        Ok(())
    }

    async fn wire_popup(&mut self) -> FolioResult {
        let projects: ProjectsData = load_json(self.data_dir.join(PROJECTS_FILE)).await?;
        let blogs: BlogsData = load_json(self.data_dir.join(BLOGS_FILE)).await?;
        self.popup = Some(ProjectPopup::new(projects.projects, blogs.blogs));
        Ok(())
    }

    async fn wire_easter_eggs(&mut self) -> FolioResult {
        let data: AchievementsData = load_json(self.data_dir.join(ACHIEVEMENTS_FILE)).await?;

        self.cards = data.achievements.iter().enumerate()
            .map(|(i, achievement)| EasterEggCard {
                bounds: Bounds::new(
                    Vector2::with_y(i as f32 * (CARD_SIZE.y() + CARD_SPACING)),
                    CARD_SIZE,
                ),
                kind: ParticleKind::from_key(achievement.easter_egg.as_deref().unwrap_or_default()),
                image: achievement.image.clone(),
            })
            .collect();

        Ok(())
    }

    /// the host reports where a card actually sits
    pub fn set_card_bounds(&mut self, index: usize, bounds: Bounds) {
        if let Some(card) = self.cards.get_mut(index) {
            card.bounds = bounds;
        }
    }

    pub fn card_count(&self) -> usize { self.cards.len() }

    // hover events, forwarded from the host document

    pub fn card_hover_enter(&mut self, index: usize) {
        let Some(card) = self.cards.get(index) else { return };
        self.engine.write().hover_enter(card);
        self.cursor.activate(card);
    }

    pub fn card_hover_move(&mut self, pointer: Vector2) {
        self.engine.write().hover_move();
        self.cursor.cursor_pos(pointer);
    }

    pub fn card_hover_leave(&mut self) {
        self.engine.write().hover_leave();
        self.cursor.deactivate();
    }

    /// click on a rendered project card. resolves the blog cross
    /// reference and fills the popup containers when it hits
    pub fn project_card_clicked(&mut self, index: usize) -> FolioResult<bool> {
        let Some(popup) = &mut self.popup else { return Ok(false) };
        if !popup.card_clicked(index) { return Ok(false) }

        let Some(content) = popup.content().cloned() else { return Ok(false) };
        let mut document = self.document.write();
        document.set_text(containers::POPUP_TITLE, &content.title)?;
        document.set_markup(
            containers::POPUP_IMAGE,
            format!(r#"<img src="{}" alt="{}">"#, html_escape(&content.image), html_escape(&content.title)),
        )?;
        document.set_markup(containers::POPUP_BODY, content.body)?;

        Ok(true)
    }

    pub fn popup_close_clicked(&mut self) {
        if let Some(popup) = &mut self.popup {
            popup.close_clicked();
        }
    }

    pub fn popup_backdrop_clicked(&mut self) {
        if let Some(popup) = &mut self.popup {
            popup.backdrop_clicked();
        }
    }

    pub fn contact_clicked(&mut self, target: ClickTarget) {
        self.dropdown.handle_click(target);
    }

    pub fn resize(&mut self, size: Vector2) {
        self.engine.write().resize(size);
    }

    /// one animation tick: advance the particle set and collect its
    /// draw commands
    pub fn frame(&mut self, list: &mut RenderableCollection) {
        let mut engine = self.engine.write();
        engine.update();
        engine.draw(list);
    }
}
