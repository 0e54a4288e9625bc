use crate::prelude::*;

lazy_static::lazy_static! {
    /// fallback hover images for cards that declare none of their own
    static ref KIND_IMAGES: HashMap<ParticleKind, &'static str> = [
        (ParticleKind::Plain, "images/eggs/spark.png"),
        (ParticleKind::Nasa, "images/eggs/nasa.png"),
        (ParticleKind::Rocket, "images/eggs/rocket.png"),
        (ParticleKind::Stars, "images/eggs/stars.png"),
        (ParticleKind::Confetti, "images/eggs/confetti.png"),
    ].into_iter().collect();
}

/// floating image that follows the pointer while a card is hovered
#[derive(Clone, Debug, Default)]
pub struct CursorImage {
    position: Vector2,
    active: bool,
    image: String,
}
impl CursorImage {
    pub fn new() -> Self { Self::default() }

    pub fn is_active(&self) -> bool { self.active }
    pub fn position(&self) -> Vector2 { self.position }

    /// the image shown, empty when nothing resolved
    pub fn image(&self) -> &str { &self.image }

    pub fn activate(&mut self, card: &EasterEggCard) {
        self.image = card.image.clone()
            .unwrap_or_else(|| KIND_IMAGES.get(&card.kind).copied().unwrap_or_default().to_owned());
        self.active = true;
    }

    pub fn cursor_pos(&mut self, pos: Vector2) {
        self.position = pos;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn card(kind: ParticleKind, image: Option<&str>) -> EasterEggCard {
        EasterEggCard {
            bounds: Bounds::default(),
            kind,
            image: image.map(String::from),
        }
    }

    #[test]
    fn card_image_wins_over_the_kind_table() {
        let mut cursor = CursorImage::new();
        cursor.activate(&card(ParticleKind::Rocket, Some("images/me.png")));
        assert_eq!(cursor.image(), "images/me.png");
        assert!(cursor.is_active());
    }

    #[test]
    fn kind_table_fills_in_missing_images() {
        let mut cursor = CursorImage::new();
        cursor.activate(&card(ParticleKind::Nasa, None));
        assert_eq!(cursor.image(), "images/eggs/nasa.png");
    }

    #[test]
    fn follows_the_pointer_until_deactivated() {
        let mut cursor = CursorImage::new();
        cursor.activate(&card(ParticleKind::Stars, None));
        cursor.cursor_pos(Vector2::new(40.0, 60.0));
        assert_eq!(cursor.position(), Vector2::new(40.0, 60.0));

        cursor.deactivate();
        assert!(!cursor.is_active());
    }
}
