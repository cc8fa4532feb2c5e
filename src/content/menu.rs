/// The ten top-level sections, in navigation order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Introduction,
    Equipment,
    Material,
    Protocols,
    Activities,
    Procedures,
    Documentation,
    Closure,
    Summary,
    References,
}

impl SectionId {
    pub const ALL: [SectionId; 10] = [
        SectionId::Introduction,
        SectionId::Equipment,
        SectionId::Material,
        SectionId::Protocols,
        SectionId::Activities,
        SectionId::Procedures,
        SectionId::Documentation,
        SectionId::Closure,
        SectionId::Summary,
        SectionId::References,
    ];

    /// Stable identifier, also used as the DOM id of the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Introduction => "introduccion",
            SectionId::Equipment => "equipamiento",
            SectionId::Material => "material",
            SectionId::Protocols => "protocolos",
            SectionId::Activities => "actividades",
            SectionId::Procedures => "procedimientos",
            SectionId::Documentation => "documentacion",
            SectionId::Closure => "cierre",
            SectionId::Summary => "resumen-conclusiones",
            SectionId::References => "referencias",
        }
    }

    /// Parse a section id. Anything unknown resolves to the introduction.
    pub fn resolve(id: &str) -> SectionId {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == id)
            .unwrap_or(SectionId::Introduction)
    }

    /// Sections rendered through the overview/detail drill-down.
    pub fn has_drill_down(&self) -> bool {
        matches!(
            self,
            SectionId::Equipment
                | SectionId::Material
                | SectionId::Protocols
                | SectionId::Activities
                | SectionId::Procedures
                | SectionId::Documentation
                | SectionId::Summary
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubMenuItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: SectionId,
    pub label: &'static str,
    pub short_label: Option<&'static str>,
    pub sub_items: &'static [SubMenuItem],
}

impl MenuItem {
    /// Label used in the horizontal navigation bar.
    pub fn nav_label(&self) -> &'static str {
        self.short_label.unwrap_or(self.label)
    }

    pub fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }
}

pub const MENU: &[MenuItem] = &[
    MenuItem {
        id: SectionId::Introduction,
        label: "Introducción",
        short_label: None,
        sub_items: &[],
    },
    MenuItem {
        id: SectionId::Equipment,
        label: "Equipamiento",
        short_label: None,
        sub_items: &[
            SubMenuItem { id: "equipamiento-sanitario", label: "Sanitario" },
            SubMenuItem { id: "equipamiento-electromedico", label: "Electromédico" },
            SubMenuItem { id: "equipamiento-informatico", label: "Informático" },
        ],
    },
    MenuItem {
        id: SectionId::Material,
        label: "Material",
        short_label: None,
        sub_items: &[
            SubMenuItem { id: "material-fungible", label: "Fungible" },
            SubMenuItem { id: "material-no-fungible", label: "No Fungible" },
            SubMenuItem { id: "material-preparacion", label: "Preparación control y reposición" },
        ],
    },
    MenuItem {
        id: SectionId::Protocols,
        label: "Protocolos de Puesta en Marcha",
        short_label: Some("Protocolos PM"),
        sub_items: &[
            SubMenuItem { id: "protocolos-gammacamara", label: "Gammacámara" },
            SubMenuItem { id: "protocolos-pet", label: "PET" },
        ],
    },
    MenuItem {
        id: SectionId::Activities,
        label: "Actividades",
        short_label: None,
        sub_items: &[
            SubMenuItem { id: "actividades-generador", label: "Generador" },
            SubMenuItem { id: "actividades-activimetro", label: "Activímetro" },
        ],
    },
    MenuItem {
        id: SectionId::Procedures,
        label: "Protocolos de Protección Radiológica",
        short_label: Some("Protocolos PR"),
        sub_items: &[
            SubMenuItem { id: "procedimientos-monitoreo", label: "Monitoreo de área y contaminación" },
            SubMenuItem { id: "procedimientos-gestion", label: "Gestión de residuos radioactivos" },
        ],
    },
    MenuItem {
        id: SectionId::Documentation,
        label: "Documentación",
        short_label: None,
        sub_items: &[
            SubMenuItem { id: "documentacion-averias", label: "Registro de averías e incidencias" },
            SubMenuItem { id: "documentacion-archivo", label: "Archivo e informes" },
        ],
    },
    MenuItem {
        id: SectionId::Closure,
        label: "Cierre",
        short_label: None,
        sub_items: &[
            SubMenuItem { id: "cierre-resumen", label: "Resumen" },
            SubMenuItem { id: "cierre-conclusiones", label: "Conclusiones" },
        ],
    },
    MenuItem {
        id: SectionId::Summary,
        label: "Resumen y Conclusiones",
        short_label: None,
        sub_items: &[],
    },
    MenuItem {
        id: SectionId::References,
        label: "Referencias",
        short_label: None,
        sub_items: &[
            SubMenuItem { id: "referencias-bibliografia", label: "Bibliografía" },
            SubMenuItem { id: "referencias-enlaces", label: "Enlaces de Interés" },
        ],
    },
];

/// Menu entry for a section. Every section has exactly one.
pub fn menu_item(section: SectionId) -> &'static MenuItem {
    MENU.iter()
        .find(|item| item.id == section)
        .unwrap_or(&MENU[0])
}

pub const LANGUAGES: &[&str] = &["Español", "English", "Português", "Français", "Italiano", "Deutsch"];

pub const DEFAULT_LANGUAGE: &str = "Español";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_covers_every_section_once() {
        assert_eq!(MENU.len(), SectionId::ALL.len());
        for (item, section) in MENU.iter().zip(SectionId::ALL) {
            assert_eq!(item.id, section, "Menu out of order at {:?}", section);
        }
    }

    #[test]
    fn test_resolve_known_ids() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::resolve(section.as_str()), section);
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_introduction() {
        for id in ["", "inicio", "EQUIPAMIENTO", "equipamiento-sanitario", " material", "zzzzz"] {
            assert_eq!(
                SectionId::resolve(id),
                SectionId::Introduction,
                "Unknown id {:?} should resolve to the introduction",
                id
            );
        }
    }

    #[test]
    fn test_sub_item_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for item in MENU {
            for sub in item.sub_items {
                assert!(seen.insert(sub.id), "Duplicate sub-item id {}", sub.id);
                assert!(
                    sub.id.starts_with(item.id.as_str()),
                    "Sub-item {} should be prefixed by its section id",
                    sub.id
                );
            }
        }
    }

    #[test]
    fn test_nav_label_prefers_short_label() {
        assert_eq!(menu_item(SectionId::Protocols).nav_label(), "Protocolos PM");
        assert_eq!(menu_item(SectionId::Procedures).nav_label(), "Protocolos PR");
        assert_eq!(menu_item(SectionId::Material).nav_label(), "Material");
    }

    #[test]
    fn test_introduction_has_no_sub_items() {
        assert!(!menu_item(SectionId::Introduction).has_sub_items());
        assert!(menu_item(SectionId::Equipment).has_sub_items());
    }
}
