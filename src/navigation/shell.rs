use super::{AnchorRect, HoverIntent, PendingHide, SearchState, SidebarState};
use crate::content::{menu_item, SectionId, DEFAULT_LANGUAGE, MENU};

/// All UI state owned by the navigation shell.
///
/// Section components receive read-only slices of this plus callbacks; the
/// shell is the single writer.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    active_section: SectionId,
    active_sub_item: Option<&'static str>,
    pub sidebar: SidebarState,
    pub hover: HoverIntent,
    pub search: SearchState,
    dark_mode: bool,
    language: &'static str,
    language_menu_open: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            active_section: SectionId::Introduction,
            active_sub_item: None,
            sidebar: SidebarState::default(),
            hover: HoverIntent::default(),
            search: SearchState::default(),
            dark_mode: false,
            language: DEFAULT_LANGUAGE,
            language_menu_open: false,
        }
    }
}

impl ShellState {
    /// Switch to a section, optionally with one of its sub-items selected.
    ///
    /// The sub-item only survives for drill-down sections, and only if it is
    /// one of that section's own menu entries. The sidebar closes and the
    /// search dropdown is dismissed.
    pub fn select_section(&mut self, section: SectionId, sub_item: Option<&'static str>) {
        self.active_section = section;
        self.active_sub_item = sub_item.filter(|id| {
            section.has_drill_down() && menu_item(section).sub_items.iter().any(|sub| sub.id == *id)
        });
        self.sidebar.close();
        self.search.dismiss();
    }

    /// Follow an in-page link (`#equipamiento`, `#actividades-generador`).
    ///
    /// Sub-item ids open their owning section with that sub-item; anything
    /// else is parsed as a section id, unknown ids landing on the introduction.
    pub fn open_link(&mut self, id: &str) {
        let owner = MENU.iter().find_map(|item| {
            item.sub_items
                .iter()
                .find(|sub| sub.id == id)
                .map(|sub| (item.id, sub.id))
        });
        match owner {
            Some((section, sub_item)) => self.select_section(section, Some(sub_item)),
            None => self.select_section(SectionId::resolve(id), None),
        }
    }

    /// Choose an entry from the hover popup.
    pub fn select_from_popup(&mut self, section: SectionId, sub_item: &'static str) {
        self.select_section(section, Some(sub_item));
        self.hover.dismiss();
    }

    /// The drill-down went back to its overview.
    pub fn clear_sub_item(&mut self) {
        self.active_sub_item = None;
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn active_sub_item(&self) -> Option<&'static str> {
        self.active_sub_item
    }

    pub fn update_search(&mut self, query: &str) {
        self.search.set_query(MENU, query);
    }

    pub fn hover_enter(&mut self, section: SectionId, anchor: AnchorRect) {
        self.hover.enter_trigger(section, anchor);
    }

    pub fn hover_leave(&mut self) -> PendingHide {
        self.hover.leave()
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_language_menu(&mut self) {
        self.language_menu_open = !self.language_menu_open;
    }

    pub fn language_menu_open(&self) -> bool {
        self.language_menu_open
    }

    /// Store the chosen language label. Content is not translated.
    pub fn select_language(&mut self, language: &'static str) {
        self.language = language;
        self.language_menu_open = false;
    }

    pub fn language(&self) -> &'static str {
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LANGUAGES;
    use crate::navigation::SearchPanel;

    #[test]
    fn test_initial_state() {
        let state = ShellState::default();
        assert_eq!(state.active_section(), SectionId::Introduction);
        assert_eq!(state.active_sub_item(), None);
        assert!(!state.sidebar.is_open());
        assert!(!state.dark_mode());
        assert_eq!(state.language(), "Español");
    }

    #[test]
    fn test_switching_section_clears_sub_item() {
        let mut state = ShellState::default();
        state.select_section(SectionId::Equipment, Some("equipamiento-sanitario"));
        assert_eq!(state.active_sub_item(), Some("equipamiento-sanitario"));

        for section in SectionId::ALL {
            state.select_section(SectionId::Equipment, Some("equipamiento-sanitario"));
            state.select_section(section, None);
            assert_eq!(state.active_section(), section);
            assert_eq!(state.active_sub_item(), None, "Sub-item leaked into {:?}", section);
        }
    }

    #[test]
    fn test_sub_item_kept_only_for_drill_down_sections() {
        let mut state = ShellState::default();
        state.select_section(SectionId::Activities, Some("actividades-generador"));
        assert_eq!(state.active_sub_item(), Some("actividades-generador"));

        state.select_section(SectionId::Closure, Some("cierre-resumen"));
        assert_eq!(state.active_sub_item(), None);

        state.select_section(SectionId::References, Some("referencias-enlaces"));
        assert_eq!(state.active_sub_item(), None);
    }

    #[test]
    fn test_sub_item_of_another_section_is_dropped() {
        let mut state = ShellState::default();
        state.select_section(SectionId::Equipment, Some("material-fungible"));
        assert_eq!(state.active_section(), SectionId::Equipment);
        assert_eq!(state.active_sub_item(), None, "Foreign sub-item kept for Equipment");

        state.select_section(SectionId::Material, Some("no-such-item"));
        assert_eq!(state.active_sub_item(), None);

        state.select_section(SectionId::Material, Some("material-fungible"));
        assert_eq!(state.active_sub_item(), Some("material-fungible"));
    }

    #[test]
    fn test_open_link_to_section_and_sub_item() {
        let mut state = ShellState::default();
        state.open_link("documentacion");
        assert_eq!(state.active_section(), SectionId::Documentation);
        assert_eq!(state.active_sub_item(), None);

        state.open_link("actividades-generador");
        assert_eq!(state.active_section(), SectionId::Activities);
        assert_eq!(state.active_sub_item(), Some("actividades-generador"));

        // Cierre is not a drill-down, so only the section is opened
        state.open_link("cierre-conclusiones");
        assert_eq!(state.active_section(), SectionId::Closure);
        assert_eq!(state.active_sub_item(), None);
    }

    #[test]
    fn test_open_unknown_link_falls_back_to_introduction() {
        let mut state = ShellState::default();
        state.select_section(SectionId::Equipment, Some("equipamiento-sanitario"));
        for id in ["zzzzz", "", "EQUIPAMIENTO"] {
            state.open_link(id);
            assert_eq!(state.active_section(), SectionId::Introduction, "Link {:?}", id);
            assert_eq!(state.active_sub_item(), None);
        }
    }

    #[test]
    fn test_section_switch_closes_sidebar_and_search() {
        let mut state = ShellState::default();
        state.sidebar.toggle();
        state.update_search("equipo");
        state.update_search("Generador");
        assert!(matches!(state.search.panel(), SearchPanel::Results(_)));

        state.select_section(SectionId::Material, None);
        assert!(!state.sidebar.is_open());
        assert_eq!(state.search.panel(), &SearchPanel::Hidden);
        assert_eq!(state.search.query(), "Generador");
    }

    #[test]
    fn test_popup_selection_dismisses_popup() {
        let mut state = ShellState::default();
        state.hover_enter(SectionId::Documentation, AnchorRect { left: 10.0, bottom: 40.0 });
        state.select_from_popup(SectionId::Documentation, "documentacion-archivo");
        assert_eq!(state.hover.visible_popup(), None);
        assert_eq!(state.active_section(), SectionId::Documentation);
        assert_eq!(state.active_sub_item(), Some("documentacion-archivo"));
    }

    #[test]
    fn test_back_to_overview_clears_sub_item() {
        let mut state = ShellState::default();
        state.select_section(SectionId::Protocols, Some("protocolos-pet"));
        state.clear_sub_item();
        assert_eq!(state.active_section(), SectionId::Protocols);
        assert_eq!(state.active_sub_item(), None);
    }

    #[test]
    fn test_language_selection_only_changes_label() {
        let mut state = ShellState::default();
        state.toggle_language_menu();
        assert!(state.language_menu_open());
        state.select_language(LANGUAGES[3]);
        assert_eq!(state.language(), "Français");
        assert!(!state.language_menu_open());
        assert_eq!(state.active_section(), SectionId::Introduction);
    }

    #[test]
    fn test_dark_mode_toggle() {
        let mut state = ShellState::default();
        state.toggle_dark_mode();
        assert!(state.dark_mode());
        state.toggle_dark_mode();
        assert!(!state.dark_mode());
    }
}
