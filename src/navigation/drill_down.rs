use crate::content::{find_item, ContentItem};

/// What a drill-down section is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillDownView {
    /// Grid of cards, one per item.
    Overview,
    /// A single item with its image and detail paragraphs.
    Detail(&'static ContentItem),
}

/// Overview/detail state for one section's item table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillDown {
    items: &'static [ContentItem],
    view: DrillDownView,
}

impl DrillDown {
    pub fn new(items: &'static [ContentItem]) -> Self {
        Self {
            items,
            view: DrillDownView::Overview,
        }
    }

    /// Start from an externally selected sub-section, if any.
    pub fn with_selection(items: &'static [ContentItem], selected: Option<&str>) -> Self {
        let mut controller = Self::new(items);
        controller.sync_external(selected);
        controller
    }

    pub fn view(&self) -> DrillDownView {
        self.view
    }

    pub fn selected(&self) -> Option<&'static ContentItem> {
        match self.view {
            DrillDownView::Detail(item) => Some(item),
            DrillDownView::Overview => None,
        }
    }

    /// Open the detail view for a card. Unknown ids leave the view unchanged.
    pub fn open(&mut self, id: &str) {
        if let Some(item) = find_item(self.items, id) {
            self.view = DrillDownView::Detail(item);
        }
    }

    /// Return to the grid.
    pub fn back(&mut self) {
        self.view = DrillDownView::Overview;
    }

    /// Apply a sub-section selection coming from the navigation shell.
    ///
    /// A known id jumps straight to its detail view; `None` or an id that is
    /// not in this table falls back to the overview.
    pub fn sync_external(&mut self, selected: Option<&str>) {
        self.view = match selected.and_then(|id| find_item(self.items, id)) {
            Some(item) => DrillDownView::Detail(item),
            None => DrillDownView::Overview,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{items_for, menu_item, SectionId, EQUIPMENT, SUMMARY};

    fn all_tables() -> impl Iterator<Item = (SectionId, &'static [ContentItem])> {
        SectionId::ALL
            .into_iter()
            .filter_map(|section| items_for(section).map(|items| (section, items)))
    }

    #[test]
    fn test_starts_in_overview() {
        let controller = DrillDown::new(EQUIPMENT);
        assert_eq!(controller.view(), DrillDownView::Overview);
        assert!(controller.selected().is_none());
    }

    #[test]
    fn test_open_and_back() {
        let mut controller = DrillDown::new(EQUIPMENT);
        controller.open("equipamiento-electromedico");
        assert_eq!(controller.selected().map(|i| i.title), Some("Electromédico"));

        controller.back();
        assert_eq!(controller.view(), DrillDownView::Overview);
    }

    #[test]
    fn test_open_unknown_id_keeps_view() {
        let mut controller = DrillDown::new(EQUIPMENT);
        controller.open("no-such-item");
        assert_eq!(controller.view(), DrillDownView::Overview);

        controller.open("equipamiento-sanitario");
        controller.open("no-such-item");
        assert_eq!(controller.selected().map(|i| i.id), Some("equipamiento-sanitario"));
    }

    #[test]
    fn test_foreign_selection_falls_back_to_overview() {
        for (section, items) in all_tables() {
            for foreign in ["", "zzzzz", "cierre-resumen", "referencias-enlaces"] {
                let controller = DrillDown::with_selection(items, Some(foreign));
                assert_eq!(
                    controller.view(),
                    DrillDownView::Overview,
                    "{:?} accepted foreign id {:?}",
                    section,
                    foreign
                );
            }
        }
    }

    #[test]
    fn test_ids_from_other_sections_are_rejected() {
        let mut controller = DrillDown::new(EQUIPMENT);
        controller.sync_external(Some("material-fungible"));
        assert_eq!(controller.view(), DrillDownView::Overview);
    }

    #[test]
    fn test_valid_selection_shows_exact_details() {
        for (section, items) in all_tables() {
            for sub in menu_item(section).sub_items {
                let controller = DrillDown::with_selection(items, Some(sub.id));
                let Some(item) = controller.selected() else {
                    panic!("{:?} did not open {}", section, sub.id);
                };
                let expected = items.iter().find(|i| i.id == sub.id).unwrap();
                assert_eq!(item.title, expected.title);
                assert_eq!(item.image, expected.image);
                assert_eq!(item.details, expected.details, "Paragraphs of {} differ", sub.id);
            }
        }
    }

    #[test]
    fn test_summary_cards_open_from_the_grid() {
        assert!(!menu_item(SectionId::Summary).has_sub_items());
        let mut controller = DrillDown::with_selection(SUMMARY, None);
        controller.open("resumen-conclusiones-conclusiones");
        assert_eq!(controller.selected().map(|i| i.title), Some("Conclusiones"));
    }

    #[test]
    fn test_external_clear_returns_to_overview() {
        let mut controller = DrillDown::with_selection(EQUIPMENT, Some("equipamiento-informatico"));
        assert!(controller.selected().is_some());
        controller.sync_external(None);
        assert_eq!(controller.view(), DrillDownView::Overview);
    }

    #[test]
    fn test_external_selection_replaces_internal_one() {
        let mut controller = DrillDown::new(EQUIPMENT);
        controller.open("equipamiento-sanitario");
        controller.sync_external(Some("equipamiento-informatico"));
        assert_eq!(controller.selected().map(|i| i.id), Some("equipamiento-informatico"));
    }
}
