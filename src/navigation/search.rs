use crate::content::MenuItem;

/// What the search dropdown shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPanel {
    #[default]
    Hidden,
    NoResults,
    Results(Vec<String>),
}

/// Search box contents and the derived dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    query: String,
    panel: SearchPanel,
}

impl SearchState {
    /// Re-run the search for a new query (called on every keystroke).
    pub fn set_query(&mut self, menu: &[MenuItem], query: &str) {
        self.query = query.to_string();
        self.panel = if query.trim().is_empty() {
            SearchPanel::Hidden
        } else {
            let results = search_menu(menu, query);
            if results.is_empty() {
                SearchPanel::NoResults
            } else {
                SearchPanel::Results(results)
            }
        };
    }

    /// Hide the dropdown but keep the typed text.
    pub fn dismiss(&mut self) {
        self.panel = SearchPanel::Hidden;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn panel(&self) -> &SearchPanel {
        &self.panel
    }
}

/// Case-insensitive substring match over section and sub-item labels, in
/// menu order.
///
/// Sections are reported as `"Label (Sección)"`, sub-items as
/// `"Section > Sub-item"`.
pub fn search_menu(menu: &[MenuItem], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut results = Vec::new();
    for item in menu {
        if item.label.to_lowercase().contains(&needle) {
            results.push(format!("{} (Sección)", item.label));
        }
        for sub in item.sub_items {
            if sub.label.to_lowercase().contains(&needle) {
                results.push(format!("{} > {}", item.label, sub.label));
            }
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MENU;

    #[test]
    fn test_blank_query_hides_panel() {
        let mut search = SearchState::default();
        for query in ["", " ", "   \t"] {
            search.set_query(MENU, query);
            assert_eq!(search.panel(), &SearchPanel::Hidden, "Query {:?}", query);
        }
    }

    #[test]
    fn test_generador_matches_activities() {
        let results = search_menu(MENU, "Generador");
        assert!(
            results.iter().any(|r| r == "Actividades > Generador"),
            "Got {:?}",
            results
        );
    }

    #[test]
    fn test_no_match_shows_empty_state() {
        let mut search = SearchState::default();
        search.set_query(MENU, "zzzzz");
        assert_eq!(search.panel(), &SearchPanel::NoResults);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(search_menu(MENU, "GAMMACÁMARA"), vec!["Protocolos de Puesta en Marcha > Gammacámara"]);
        assert_eq!(search_menu(MENU, "pet"), vec!["Protocolos de Puesta en Marcha > PET"]);
    }

    #[test]
    fn test_section_and_sub_item_formats_in_menu_order() {
        assert_eq!(
            search_menu(MENU, "resumen"),
            vec!["Cierre > Resumen", "Resumen y Conclusiones (Sección)"]
        );
        assert_eq!(
            search_menu(MENU, "conclusiones"),
            vec!["Cierre > Conclusiones", "Resumen y Conclusiones (Sección)"]
        );
    }

    #[test]
    fn test_section_label_match() {
        let results = search_menu(MENU, "documentación");
        assert_eq!(results, vec!["Documentación (Sección)"]);
    }

    #[test]
    fn test_short_labels_are_not_searched() {
        assert!(search_menu(MENU, "Protocolos PM").is_empty());
    }

    #[test]
    fn test_query_text_is_kept_on_dismiss() {
        let mut search = SearchState::default();
        search.set_query(MENU, "material");
        assert!(matches!(search.panel(), SearchPanel::Results(_)));
        search.dismiss();
        assert_eq!(search.query(), "material");
        assert_eq!(search.panel(), &SearchPanel::Hidden);
    }
}
