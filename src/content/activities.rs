use super::{ContentItem, Icon, ImageSource, SUPPLIES_IMAGE};

pub const ACTIVITIES: &[ContentItem] = &[
    ContentItem {
        id: "actividades-generador",
        title: "Generador",
        summary: "Elución y control del generador de molibdeno-99/tecnecio-99m que abastece la radiofarmacia.",
        icon: Icon::CalendarCheck,
        image: SUPPLIES_IMAGE,
        details: &[
            "El generador de 99Mo/99mTc se recibe, se verifica su integridad y blindaje y se registra con su actividad de calibración y fecha de referencia.",
            "Cada elución se realiza en condiciones asépticas dentro del recinto blindado, anotando hora, volumen y actividad obtenida.",
            "Sobre el eluido se comprueba la contaminación por molibdeno y la pureza radioquímica antes de su uso en el marcaje de radiofármacos.",
            "Al agotarse su vida útil, el generador se almacena para su decaimiento y se devuelve al proveedor según el procedimiento de gestión de residuos.",
        ],
    },
    ContentItem {
        id: "actividades-activimetro",
        title: "Activímetro",
        summary: "Calibrador de dosis con el que se mide la actividad de cada radiofármaco antes de su administración.",
        icon: Icon::Settings,
        image: ImageSource::Asset("images/imagen_material_fungible.png"),
        details: &[
            "El activímetro mide la actividad de cada dosis preparada para asegurar que el paciente recibe exactamente lo prescrito.",
            "Diariamente se realizan las pruebas de fondo, alto voltaje, ajuste de cero y constancia con una fuente patrón de cesio-137.",
            "Con periodicidad establecida se comprueban la exactitud, la linealidad y la geometría, y se conserva el certificado de calibración vigente.",
            "Un resultado fuera de tolerancia invalida las mediciones hasta la recalibración del equipo.",
        ],
    },
];

/// Recurring maintenance task shown under the activities grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledActivity {
    pub title: &'static str,
    pub frequency: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: &'static str,
}

pub const ACTIVITY_SCHEDULE: &[ScheduledActivity] = &[
    ScheduledActivity {
        title: "Revisión Diaria de Equipos",
        frequency: "Diaria",
        description: "Inspección visual y funcional de todos los equipos. Verificación de uniformidad en gammacámaras y comprobación de sistemas de seguridad activos.",
        icon: Icon::CalendarCheck,
        accent: "blue",
    },
    ScheduledActivity {
        title: "Calibración de Instrumentos",
        frequency: "Semanal",
        description: "Calibración de activímetros y verificación de detectores de radiación. Control de linealidad y reproducibilidad de mediciones.",
        icon: Icon::Settings,
        accent: "purple",
    },
    ScheduledActivity {
        title: "Control de Contaminación",
        frequency: "Diaria",
        description: "Monitorización de superficies de trabajo, suelos y equipos. Registro de niveles de contaminación y acciones de descontaminación si necesario.",
        icon: Icon::ShieldCheck,
        accent: "green",
    },
    ScheduledActivity {
        title: "Verificación de Material",
        frequency: "Semanal",
        description: "Inventario de material fungible, verificación de fechas de caducidad y estado de conservación. Reposición según necesidades.",
        icon: Icon::ClipboardList,
        accent: "orange",
    },
    ScheduledActivity {
        title: "Mantenimiento Preventivo",
        frequency: "Mensual",
        description: "Limpieza profunda de equipos, lubricación de partes móviles, verificación de conexiones eléctricas y sistemas de refrigeración.",
        icon: Icon::Settings,
        accent: "indigo",
    },
    ScheduledActivity {
        title: "Auditoría de Protocolos",
        frequency: "Trimestral",
        description: "Revisión de cumplimiento de protocolos de seguridad, actualización de documentación y evaluación de incidencias registradas.",
        icon: Icon::ClipboardList,
        accent: "red",
    },
];
