use super::{ContentItem, Icon, ImageSource, MAINTENANCE_IMAGE, PET_SCANNER_IMAGE};

pub const EQUIPMENT: &[ContentItem] = &[
    ContentItem {
        id: "equipamiento-sanitario",
        title: "Sanitario",
        summary: "Equipos asistenciales del área diagnóstica y terapéutica que sostienen la atención clínica segura.",
        icon: Icon::Scan,
        image: ImageSource::Asset("images/imagen_material_fungible.png"),
        details: &[
            "El equipamiento sanitario integra los dispositivos clínicos de soporte directo al paciente durante los procedimientos de medicina nuclear.",
            "Su disponibilidad impacta en la seguridad, en la continuidad asistencial y en la capacidad de respuesta frente a incidencias durante la exploración.",
            "Incluye revisión funcional periódica, control de estado físico, verificación de alarmas y registro documental de mantenimiento.",
        ],
    },
    ContentItem {
        id: "equipamiento-electromedico",
        title: "Electromédico",
        summary: "Sistemas diagnósticos de alta complejidad cuya precisión depende de calibraciones y control técnico continuo.",
        icon: Icon::Monitor,
        image: PET_SCANNER_IMAGE,
        details: &[
            "El equipamiento electromédico comprende equipos como gammacámara, PET/CT y SPECT/CT, esenciales para la obtención de imágenes diagnósticas de alta calidad.",
            "Estos sistemas requieren programas de control de calidad diarios, semanales y periódicos para asegurar exactitud cuantitativa y reproducibilidad.",
            "La gestión incluye mantenimiento preventivo, intervención correctiva, validación posterior y documentación conforme a normativa.",
        ],
    },
    ContentItem {
        id: "equipamiento-informatico",
        title: "Informático",
        summary: "Infraestructura digital que permite adquisición, procesamiento, almacenamiento y trazabilidad de estudios.",
        icon: Icon::Activity,
        image: MAINTENANCE_IMAGE,
        details: &[
            "El equipamiento informático abarca estaciones de trabajo, servidores, red local, PACS y sistemas de información clínica vinculados a medicina nuclear.",
            "Su mantenimiento garantiza integridad de datos, seguridad de acceso, continuidad operativa y disponibilidad de informes e imágenes.",
            "La estrategia incluye copias de seguridad, control de versiones, monitorización de rendimiento y planes de recuperación ante fallos.",
        ],
    },
];
