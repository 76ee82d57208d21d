#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Link clicks inside the menu always close it.
    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_toggles() {
        let menu = MenuState::default();
        assert!(menu.toggled().open);
        assert!(!menu.toggled().toggled().open);
    }

    #[test]
    fn link_click_closes_from_either_state() {
        assert!(!MenuState { open: true }.closed().open);
        assert!(!MenuState { open: false }.closed().open);
        assert_eq!(MenuState { open: true }.closed().closed(), MenuState::default());
    }
}
