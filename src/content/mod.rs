//! Static content tables: the menu and the per-section reference data.
//!
//! Nothing here is mutated at runtime.

mod activities;
mod documentation;
mod equipment;
mod material;
mod menu;
mod procedures;
mod protocols;
mod references;
mod summary;

pub use activities::{ScheduledActivity, ACTIVITIES, ACTIVITY_SCHEDULE};
pub use documentation::{DocumentEntry, DOCUMENTATION, DOCUMENT_CATALOGUE};
pub use equipment::EQUIPMENT;
pub use material::{MaterialCard, MATERIAL, MATERIAL_CARDS};
pub use menu::{menu_item, MenuItem, SectionId, SubMenuItem, DEFAULT_LANGUAGE, LANGUAGES, MENU};
pub use procedures::{ProcedureStep, MAINTENANCE_STEPS, PROCEDURES};
pub use protocols::{ProtocolChecklist, PROTOCOLS, PROTOCOL_CHECKLISTS};
pub use references::{Reference, ReferenceLink, LINKS_OF_INTEREST, REFERENCES};
pub use summary::{KEY_POINTS, SUMMARY};

use crate::config::asset_url;

pub const HERO_IMAGE: ImageSource = ImageSource::Remote(
    "https://images.unsplash.com/photo-1758101512269-660feabf64fd?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxudWNsZWFyJTIwbWVkaWNpbmUlMjByb29tJTIwaG9zcGl0YWx8ZW58MXx8fHwxNzY2NDkyMzQ5fDA&ixlib=rb-4.1.0&q=80&w=1080",
);
pub(crate) const PET_SCANNER_IMAGE: ImageSource = ImageSource::Remote(
    "https://images.unsplash.com/photo-1654762930571-dcf2ebc11542?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxwZXQlMjBzY2FubmVyJTIwaG9zcGl0YWx8ZW58MXx8fHwxNzY2NDg5ODk3fDA&ixlib=rb-4.1.0&q=80&w=1080",
);
pub(crate) const MAINTENANCE_IMAGE: ImageSource = ImageSource::Remote(
    "https://images.unsplash.com/photo-1766299892683-d50398e31823?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtZWRpY2FsJTIwZXF1aXBtZW50JTIwbWFpbnRlbmFuY2V8ZW58MXx8fHwxNzY2NDA3NjM0fDA&ixlib=rb-4.1.0&q=80&w=1080",
);
pub(crate) const SUPPLIES_IMAGE: ImageSource = ImageSource::Remote(
    "https://images.unsplash.com/photo-1583830379747-195159d0de82?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxob3NwaXRhbCUyMG1lZGljYWwlMjBzdXBwbGllc3xlbnwxfHx8fDE3NjY0ODk4OTh8MA&ixlib=rb-4.1.0&q=80&w=1080",
);
pub(crate) const DOCUMENTS_IMAGE: ImageSource = ImageSource::Remote(
    "https://images.unsplash.com/photo-1620933967796-53cc2b175b6c?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtZWRpY2FsJTIwZG9jdW1lbnRhdGlvbiUyMGZpbGVzfGVufDF8fHx8MTc2NjQ4OTg5OHww&ixlib=rb-4.1.0&q=80&w=1080",
);

/// Glyphs available to content cards and the shell chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Activity,
    ArrowLeft,
    BookOpen,
    CalendarCheck,
    ChevronDown,
    ChevronUp,
    CircleCheck,
    ClipboardCheck,
    ClipboardList,
    Download,
    Droplet,
    FileCheck,
    FileText,
    Instagram,
    Languages,
    Linkedin,
    ListChecks,
    Menu,
    Monitor,
    Moon,
    Package,
    Scan,
    Search,
    Settings,
    Shield,
    ShieldCheck,
    Sun,
    X,
    Youtube,
}

/// Where an image lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Shipped with the site, relative to the deployment base path.
    Asset(&'static str),
    /// Hosted elsewhere, used verbatim.
    Remote(&'static str),
}

impl ImageSource {
    pub fn url(&self) -> String {
        match self {
            ImageSource::Asset(path) => asset_url(path),
            ImageSource::Remote(url) => (*url).to_string(),
        }
    }
}

/// One sub-topic card in a drill-down section.
///
/// `id` matches a [`SubMenuItem::id`] of the owning section so that a
/// selection made in the navigation shell can open the detail view directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentItem {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: Icon,
    pub image: ImageSource,
    pub details: &'static [&'static str],
}

/// Find an item by id in a section table.
pub fn find_item(items: &'static [ContentItem], id: &str) -> Option<&'static ContentItem> {
    items.iter().find(|item| item.id == id)
}

/// Drill-down table for a section, if the section has one.
pub fn items_for(section: SectionId) -> Option<&'static [ContentItem]> {
    match section {
        SectionId::Equipment => Some(EQUIPMENT),
        SectionId::Material => Some(MATERIAL),
        SectionId::Protocols => Some(PROTOCOLS),
        SectionId::Activities => Some(ACTIVITIES),
        SectionId::Procedures => Some(PROCEDURES),
        SectionId::Documentation => Some(DOCUMENTATION),
        SectionId::Summary => Some(SUMMARY),
        SectionId::Introduction | SectionId::Closure | SectionId::References => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drill_down_sections_have_tables() {
        for section in SectionId::ALL {
            assert_eq!(
                section.has_drill_down(),
                items_for(section).is_some(),
                "Drill-down flag and table disagree for {:?}",
                section
            );
        }
    }

    #[test]
    fn test_content_ids_match_menu_sub_items() {
        for section in SectionId::ALL {
            let Some(items) = items_for(section) else { continue };
            let menu_ids: Vec<_> = menu_item(section).sub_items.iter().map(|s| s.id).collect();
            // Sections without menu sub-items are only reachable through their grid
            if menu_ids.is_empty() {
                continue;
            }
            let item_ids: Vec<_> = items.iter().map(|i| i.id).collect();
            assert_eq!(item_ids, menu_ids, "Content table of {:?} out of sync with the menu", section);
        }
    }

    #[test]
    fn test_content_items_are_complete() {
        for section in SectionId::ALL {
            let Some(items) = items_for(section) else { continue };
            for item in items {
                assert!(!item.title.is_empty(), "{} has no title", item.id);
                assert!(!item.summary.is_empty(), "{} has no summary", item.id);
                assert!(!item.details.is_empty(), "{} has no detail paragraphs", item.id);
            }
        }
    }

    #[test]
    fn test_find_item() {
        assert_eq!(find_item(EQUIPMENT, "equipamiento-informatico").map(|i| i.title), Some("Informático"));
        assert!(find_item(EQUIPMENT, "material-fungible").is_none());
    }

    #[test]
    fn test_remote_image_url_is_verbatim() {
        let src = ImageSource::Remote("https://example.org/a.jpg");
        assert_eq!(src.url(), "https://example.org/a.jpg");
    }

    #[test]
    fn test_asset_image_url_is_rooted() {
        let url = ImageSource::Asset("images/icono.png").url();
        assert!(url.starts_with('/'), "Asset URL {} should be absolute", url);
        assert!(url.ends_with("/images/icono.png"));
    }
}
