use crate::prelude::*;

/// where a click landed, relative to the dropdown widget
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Trigger,
    Menu,
    MenuOption,
    Outside,
}

/// the contact dropdown: trigger toggles, picking an option or
/// clicking away closes
#[derive(Clone, Debug, Default)]
pub struct ContactDropdown {
    open: bool,
}
impl ContactDropdown {
    pub fn new() -> Self { Self::default() }

    pub fn is_open(&self) -> bool { self.open }

    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Trigger => self.open = !self.open,
            ClickTarget::MenuOption => self.open = false,
            ClickTarget::Outside => self.open = false,
            // clicks inside the menu body leave it open
            ClickTarget::Menu => {}
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_toggles() {
        let mut dropdown = ContactDropdown::new();
        dropdown.handle_click(ClickTarget::Trigger);
        assert!(dropdown.is_open());
        dropdown.handle_click(ClickTarget::Trigger);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn outside_click_closes() {
        let mut dropdown = ContactDropdown::new();
        dropdown.handle_click(ClickTarget::Trigger);
        dropdown.handle_click(ClickTarget::Outside);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn selecting_an_option_closes() {
        let mut dropdown = ContactDropdown::new();
        dropdown.handle_click(ClickTarget::Trigger);
        dropdown.handle_click(ClickTarget::MenuOption);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn menu_body_clicks_keep_it_open() {
        let mut dropdown = ContactDropdown::new();
        dropdown.handle_click(ClickTarget::Trigger);
        dropdown.handle_click(ClickTarget::Menu);
        assert!(dropdown.is_open());
    }
}
