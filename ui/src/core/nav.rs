//! Mobile navigation menu and navbar restyling.

/// Offset beyond which the navbar switches to its solid style.
pub const NAVBAR_SOLID_AFTER_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAnimation {
    SlideDown,
    SlideUp,
}

impl MenuAnimation {
    pub fn css(self) -> &'static str {
        match self {
            MenuAnimation::SlideDown => "slideDown 0.3s ease forwards",
            MenuAnimation::SlideUp => "slideUp 0.3s ease forwards",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
    animation: Option<MenuAnimation>,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle control click: flip and pick the matching transition.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.animation = Some(if self.open {
            MenuAnimation::SlideDown
        } else {
            MenuAnimation::SlideUp
        });
    }

    /// Nav link click: force closed. The last transition is left alone.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns true when the key closed an open menu.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.close();
            true
        } else {
            false
        }
    }

    /// Class shared by `.nav-toggle` and `.nav-menu`.
    pub fn active_class(&self) -> &'static str {
        if self.open {
            "active"
        } else {
            ""
        }
    }

    pub fn menu_style(&self) -> String {
        self.animation
            .map(|animation| format!("animation: {};", animation.css()))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    Translucent,
    Solid,
}

impl NavbarStyle {
    pub fn for_offset(offset: f64) -> Self {
        if offset > NAVBAR_SOLID_AFTER_PX {
            NavbarStyle::Solid
        } else {
            NavbarStyle::Translucent
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NavbarStyle::Solid => "rgba(255, 255, 255, 0.98)",
            NavbarStyle::Translucent => "rgba(255, 255, 255, 0.95)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            NavbarStyle::Solid => "0 2px 20px rgba(0, 0, 0, 0.1)",
            NavbarStyle::Translucent => "0 2px 10px rgba(0, 0, 0, 0.1)",
        }
    }

    pub fn inline(self) -> String {
        format!(
            "background: {}; box-shadow: {};",
            self.background(),
            self.box_shadow()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_transitions() {
        let mut menu = NavMenu::default();
        assert_eq!(menu.menu_style(), "");
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.active_class(), "active");
        assert_eq!(menu.menu_style(), "animation: slideDown 0.3s ease forwards;");
        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(menu.menu_style(), "animation: slideUp 0.3s ease forwards;");
    }

    #[test]
    fn link_close_is_idempotent() {
        let mut menu = NavMenu::default();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.active_class(), "");
    }

    #[test]
    fn escape_only_closes_an_open_menu() {
        let mut menu = NavMenu::default();
        assert!(!menu.handle_key("Escape"));
        menu.toggle();
        assert!(!menu.handle_key("Enter"));
        assert!(menu.handle_key("Escape"));
        assert!(!menu.is_open());
    }

    #[test]
    fn navbar_threshold_has_no_hysteresis() {
        assert_eq!(NavbarStyle::for_offset(0.0), NavbarStyle::Translucent);
        assert_eq!(NavbarStyle::for_offset(100.0), NavbarStyle::Translucent);
        assert_eq!(NavbarStyle::for_offset(100.5), NavbarStyle::Solid);
        assert_eq!(NavbarStyle::for_offset(99.0), NavbarStyle::Translucent);
    }
}
