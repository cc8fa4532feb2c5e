use super::{ContentItem, Icon, DOCUMENTS_IMAGE, MAINTENANCE_IMAGE};

pub const DOCUMENTATION: &[ContentItem] = &[
    ContentItem {
        id: "documentacion-averias",
        title: "Registro de averías e incidencias",
        summary: "Trazabilidad de cada fallo desde su detección hasta la validación del equipo reparado.",
        icon: Icon::ClipboardList,
        image: MAINTENANCE_IMAGE,
        details: &[
            "Cada avería se documenta con fecha y hora, equipo afectado, descripción del fallo, persona que lo detecta y repercusión en la actividad asistencial.",
            "El registro recoge la comunicación al servicio técnico, las intervenciones realizadas, las piezas sustituidas y el tiempo de inactividad.",
            "Tras la reparación se adjuntan las pruebas de control de calidad que autorizan de nuevo el uso clínico del equipo.",
            "El análisis periódico de las incidencias permite detectar fallos recurrentes y ajustar el programa de mantenimiento preventivo.",
        ],
    },
    ContentItem {
        id: "documentacion-archivo",
        title: "Archivo e informes",
        summary: "Conservación ordenada de certificados, informes de control de calidad y documentación reglamentaria.",
        icon: Icon::FileText,
        image: DOCUMENTS_IMAGE,
        details: &[
            "El archivo reúne manuales de fabricante, certificados de calibración, informes de control de calidad, registros dosimétricos y autorizaciones de la instalación.",
            "Los documentos se conservan durante los plazos establecidos por la normativa y están disponibles para las inspecciones del organismo regulador.",
            "Con periodicidad anual se elabora el informe de funcionamiento de la instalación que resume actividad, incidencias y resultados de control.",
        ],
    },
];

/// Reference document offered for consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
    pub icon: Icon,
}

pub const DOCUMENT_CATALOGUE: &[DocumentEntry] = &[
    DocumentEntry {
        title: "Manual de Operación de Gammacámara",
        description: "Instrucciones detalladas de uso, mantenimiento y resolución de problemas para equipos de gammagrafía.",
        kind: "PDF - Manual",
        icon: Icon::BookOpen,
    },
    DocumentEntry {
        title: "Protocolo de Seguridad Radiológica",
        description: "Normativa de protección radiológica, límites de dosis y procedimientos de emergencia.",
        kind: "PDF - Protocolo",
        icon: Icon::ClipboardList,
    },
    DocumentEntry {
        title: "Registro de Mantenimiento",
        description: "Formularios y plantillas para documentación de actividades de mantenimiento preventivo y correctivo.",
        kind: "Excel - Registro",
        icon: Icon::FileText,
    },
    DocumentEntry {
        title: "Normativa CSN (Consejo de Seguridad Nuclear)",
        description: "Reglamento sobre instalaciones nucleares y radiactivas, y guías de seguridad aplicables.",
        kind: "PDF - Normativa",
        icon: Icon::BookOpen,
    },
    DocumentEntry {
        title: "Certificados de Calibración",
        description: "Documentación de calibraciones realizadas por servicios técnicos autorizados.",
        kind: "PDF - Certificado",
        icon: Icon::FileText,
    },
    DocumentEntry {
        title: "Procedimientos de Control de Calidad",
        description: "Protocolos detallados para verificación de parámetros técnicos y funcionales.",
        kind: "PDF - Procedimiento",
        icon: Icon::ClipboardList,
    },
];
