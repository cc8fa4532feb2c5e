use super::{ContentItem, Icon, ImageSource, SUPPLIES_IMAGE};

pub const MATERIAL: &[ContentItem] = &[
    ContentItem {
        id: "material-fungible",
        title: "Fungible",
        summary: "Consumibles de un solo uso cuya disponibilidad condiciona el inicio de cada exploración.",
        icon: Icon::Droplet,
        image: ImageSource::Asset("images/imagen_material_fungible.png"),
        details: &[
            "El material fungible incluye jeringas, agujas, catéteres, gasas, guantes, empapadores y material estéril empleado en la preparación y administración de radiofármacos.",
            "Se gestiona mediante control de stock mínimo, rotación por fecha de caducidad y almacenamiento en condiciones adecuadas de temperatura y humedad.",
            "El material contaminado se segrega tras su uso como residuo radiactivo o sanitario según la medición de actividad residual.",
        ],
    },
    ContentItem {
        id: "material-no-fungible",
        title: "No Fungible",
        summary: "Elementos reutilizables de protección, blindaje y medida que requieren inspección periódica.",
        icon: Icon::Shield,
        image: SUPPLIES_IMAGE,
        details: &[
            "Comprende delantales plomados, protectores tiroideos, protectores de jeringa, contenedores blindados, fuentes de calibración y maniquíes de control de calidad.",
            "Cada elemento dispone de un registro de inventario con fecha de adquisición, ubicación y resultado de la última revisión.",
            "Las prendas plomadas se inspeccionan visual y radiológicamente para detectar grietas o pérdidas de blindaje y se retiran cuando no superan la verificación.",
        ],
    },
    ContentItem {
        id: "material-preparacion",
        title: "Preparación control y reposición",
        summary: "Rutina diaria que asegura que la sala dispone de todo lo necesario antes del primer paciente.",
        icon: Icon::Package,
        image: SUPPLIES_IMAGE,
        details: &[
            "Al inicio de la jornada se comprueba la dotación de la sala frente a una lista de verificación y se repone el material consumido el día anterior.",
            "Se revisan fechas de caducidad, integridad de envases estériles y estado de los blindajes antes de preparar las dosis.",
            "Las incidencias de suministro se registran y se comunican al almacén para evitar la suspensión de exploraciones programadas.",
        ],
    },
];

/// Overview cards listed below the sub-topic grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const MATERIAL_CARDS: &[MaterialCard] = &[
    MaterialCard {
        title: "Radiofármacos",
        description: "Control de calidad, almacenamiento y registro de isótopos radiactivos. Verificación de actividad y pureza radioquímica según protocolos establecidos.",
        icon: Icon::Droplet,
    },
    MaterialCard {
        title: "Material de Protección",
        description: "Delantales plomados, protectores tiroideos, guantes, y otros elementos de protección radiológica. Inspección periódica de integridad.",
        icon: Icon::Shield,
    },
    MaterialCard {
        title: "Jeringas y Contenedores",
        description: "Jeringas blindadas, viales plomados y contenedores de transporte para material radiactivo. Limpieza y verificación de blindaje.",
        icon: Icon::Package,
    },
    MaterialCard {
        title: "Calibradores de Dosis",
        description: "Activímetros para medición de actividad de radiofármacos. Calibración periódica y verificación de constancia con fuentes patrón.",
        icon: Icon::Settings,
    },
    MaterialCard {
        title: "Detectores de Radiación",
        description: "Contadores Geiger, detectores de contaminación y monitores de área. Verificación de funcionamiento y calibración regular.",
        icon: Icon::Activity,
    },
    MaterialCard {
        title: "Consumibles Sanitarios",
        description: "Material estéril, gasas, desinfectantes y elementos de un solo uso. Control de stock y fechas de caducidad.",
        icon: Icon::Package,
    },
];
