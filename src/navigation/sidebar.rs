use crate::content::SectionId;

/// Slide-in menu with at most one expanded section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    open: bool,
    expanded: Option<SectionId>,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Expand a section's sub-items, collapsing any other. Toggling the
    /// expanded section collapses it.
    pub fn toggle_expanded(&mut self, section: SectionId) {
        self.expanded = if self.expanded == Some(section) {
            None
        } else {
            Some(section)
        };
    }

    pub fn is_expanded(&self, section: SectionId) -> bool {
        self.expanded == Some(section)
    }

    pub fn expanded(&self) -> Option<SectionId> {
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_open_close() {
        let mut sidebar = SidebarState::default();
        assert!(!sidebar.is_open());
        sidebar.toggle();
        assert!(sidebar.is_open());
        sidebar.toggle();
        assert!(!sidebar.is_open());
        sidebar.toggle();
        sidebar.close();
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_expanding_second_collapses_first() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle_expanded(SectionId::Equipment);
        assert!(sidebar.is_expanded(SectionId::Equipment));

        sidebar.toggle_expanded(SectionId::Material);
        assert!(sidebar.is_expanded(SectionId::Material));
        assert!(!sidebar.is_expanded(SectionId::Equipment));

        let expanded: Vec<_> = SectionId::ALL
            .into_iter()
            .filter(|s| sidebar.is_expanded(*s))
            .collect();
        assert_eq!(expanded, vec![SectionId::Material]);
    }

    #[test]
    fn test_toggling_expanded_section_collapses_it() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle_expanded(SectionId::References);
        sidebar.toggle_expanded(SectionId::References);
        assert_eq!(sidebar.expanded(), None);
    }

    #[test]
    fn test_expansion_survives_close() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle();
        sidebar.toggle_expanded(SectionId::Closure);
        sidebar.close();
        sidebar.toggle();
        assert!(sidebar.is_expanded(SectionId::Closure));
    }
}
