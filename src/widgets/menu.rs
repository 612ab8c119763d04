//! Mobile menu open/closed state

/// Where a click inside the open menu landed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuClick {
    /// The backdrop around the panel
    Overlay,
    /// A section link
    NavLink,
    /// Anything else on the panel: title, divider, external links
    Panel,
}

impl MenuClick {
    pub fn is_navigation(&self) -> bool {
        matches!(self, MenuClick::Overlay | MenuClick::NavLink)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A navigation choice made from inside the menu always closes it
    pub fn navigate(&mut self) -> bool {
        self.open = false;
        self.open
    }

    /// Close on overlay or nav link clicks; panel clicks keep the menu open
    pub fn on_click(&mut self, click: MenuClick) -> bool {
        if click.is_navigation() {
            self.navigate()
        } else {
            self.open
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_then_navigate() {
        let mut menu = MenuToggle::new();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.navigate());
    }

    #[test]
    fn test_toggle_flips_and_navigate_is_idempotent() {
        let mut menu = MenuToggle::new();
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
        menu.navigate();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_panel_click_keeps_menu_open() {
        let mut menu = MenuToggle::new();
        menu.toggle();
        assert!(menu.on_click(MenuClick::Panel));
        assert!(menu.is_open());
    }

    #[test]
    fn test_overlay_and_link_clicks_close() {
        let mut menu = MenuToggle::new();
        menu.toggle();
        assert!(!menu.on_click(MenuClick::NavLink));

        menu.toggle();
        assert!(!menu.on_click(MenuClick::Overlay));
    }
}
