use super::{ContentItem, Icon, MAINTENANCE_IMAGE, PET_SCANNER_IMAGE};

pub const PROTOCOLS: &[ContentItem] = &[
    ContentItem {
        id: "protocolos-gammacamara",
        title: "Gammacámara",
        summary: "Secuencia de arranque y comprobaciones previas a la primera exploración del día.",
        icon: Icon::ClipboardCheck,
        image: MAINTENANCE_IMAGE,
        details: &[
            "La puesta en marcha comienza con la verificación de las condiciones ambientales de la sala, temperatura y humedad, y el encendido del sistema siguiendo el orden indicado por el fabricante.",
            "Tras el periodo de estabilización se realiza el control de uniformidad intrínseca o extrínseca con fuente de referencia, comprobando que los valores integral y diferencial se mantienen dentro de tolerancia.",
            "Se verifican el centrado del fotopico, el movimiento de los cabezales, los sistemas anticolisión y el estado de los colimadores antes de autorizar el uso clínico.",
            "Los resultados se registran en el libro de control de calidad; cualquier desviación suspende la actividad hasta su corrección y nueva verificación.",
        ],
    },
    ContentItem {
        id: "protocolos-pet",
        title: "PET",
        summary: "Controles diarios del tomógrafo PET/CT antes de iniciar la agenda clínica.",
        icon: Icon::ListChecks,
        image: PET_SCANNER_IMAGE,
        details: &[
            "El arranque del PET/CT incluye el calentamiento del tubo de rayos X del CT y la calibración de aire previa a cualquier adquisición.",
            "El control diario de detectores con fuente de germanio-68 o con maniquí cilíndrico comprueba la ganancia, el tiempo de coincidencia y la respuesta de cada bloque.",
            "Se revisa la concordancia del valor de captación estándar (SUV) frente al valor esperado y el correcto registro PET/CT.",
            "Solo cuando todos los parámetros están dentro de especificaciones se libera el equipo para la primera exploración del día.",
        ],
    },
];

/// Checklist card shown under the protocols grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolChecklist {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    /// Colour modifier for the icon badge (`purple`, `blue`, ...).
    pub accent: &'static str,
    pub items: &'static [&'static str],
}

pub const PROTOCOL_CHECKLISTS: &[ProtocolChecklist] = &[
    ProtocolChecklist {
        title: "Mantenimiento Preventivo",
        description: "Protocolos de revisión y mantenimiento programado para garantizar el funcionamiento óptimo",
        icon: Icon::ClipboardCheck,
        accent: "purple",
        items: &[
            "Inspección visual diaria de equipos y sistemas",
            "Calibración mensual de detectores y calibradores",
            "Verificación trimestral de sistemas de seguridad",
            "Mantenimiento semestral de sistemas mecánicos",
            "Revisión anual completa por servicio técnico autorizado",
        ],
    },
    ProtocolChecklist {
        title: "Control de Calidad",
        description: "Procedimientos de verificación de calidad y precisión de equipos e imágenes",
        icon: Icon::ListChecks,
        accent: "blue",
        items: &[
            "Test de uniformidad diario en gammacámaras",
            "Verificación de resolución espacial semanal",
            "Control de calidad de radiofármacos antes de uso",
            "Verificación de sincronización PET/CT mensual",
            "Documentación y registro de todos los tests realizados",
        ],
    },
    ProtocolChecklist {
        title: "Seguridad Radiológica",
        description: "Protocolos de protección radiológica y prevención de contaminación",
        icon: Icon::ShieldCheck,
        accent: "green",
        items: &[
            "Monitorización de niveles de radiación ambiental",
            "Control de contaminación de superficies",
            "Verificación de equipos de protección individual",
            "Gestión de residuos radiactivos según normativa",
            "Dosimetría personal del personal expuesto",
        ],
    },
    ProtocolChecklist {
        title: "Documentación y Registros",
        description: "Mantenimiento de registros y documentación técnica reglamentaria",
        icon: Icon::FileText,
        accent: "orange",
        items: &[
            "Libro de operaciones y mantenimiento actualizado",
            "Registro de incidencias y acciones correctivas",
            "Certificados de calibración y verificación",
            "Documentación de formación del personal",
            "Informes de controles de calidad periódicos",
        ],
    },
];
