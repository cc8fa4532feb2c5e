use super::{ContentItem, Icon, HERO_IMAGE, SUPPLIES_IMAGE};

pub const PROCEDURES: &[ContentItem] = &[
    ContentItem {
        id: "procedimientos-monitoreo",
        title: "Monitoreo de área y contaminación",
        summary: "Vigilancia de tasas de dosis y contaminación superficial en las zonas controladas y vigiladas.",
        icon: Icon::ShieldCheck,
        image: HERO_IMAGE,
        details: &[
            "Las zonas de la instalación se clasifican y señalizan según el riesgo de exposición, y cada una tiene asignados puntos fijos de medida.",
            "Con monitores de radiación calibrados se registran periódicamente las tasas de dosis ambientales en sala de exploración, cámara caliente y zonas de espera.",
            "La contaminación superficial se comprueba en superficies de trabajo, suelos y equipos al final de cada jornada y tras cualquier derrame.",
            "Los valores que superan los niveles de investigación desencadenan la descontaminación, una nueva medida y el registro de la incidencia.",
        ],
    },
    ContentItem {
        id: "procedimientos-gestion",
        title: "Gestión de residuos radioactivos",
        summary: "Segregación, almacenamiento para decaimiento y evacuación controlada de los residuos generados.",
        icon: Icon::Package,
        image: SUPPLIES_IMAGE,
        details: &[
            "Los residuos se segregan en origen por estado físico, tipo de radionúclido y periodo de semidesintegración en contenedores blindados y etiquetados.",
            "Se almacenan en el almacén de residuos el tiempo necesario para su decaimiento, con registro de fecha de entrada y actividad estimada.",
            "Antes de su evacuación como residuo convencional se mide la actividad residual para confirmar que está por debajo de los niveles de desclasificación.",
            "Los residuos que no pueden desclasificarse se entregan a la empresa autorizada conforme a la normativa vigente.",
        ],
    },
];

/// One step of the general maintenance procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcedureStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const MAINTENANCE_STEPS: &[ProcedureStep] = &[
    ProcedureStep {
        title: "Preparación Inicial",
        description: "Revisión del programa de mantenimiento y preparación de herramientas, equipos de medida y documentación necesaria. Verificación de disponibilidad de material y repuestos.",
    },
    ProcedureStep {
        title: "Inspección Visual",
        description: "Examen detallado del estado general del equipo, cables, conexiones y componentes externos. Detección de anomalías visibles, desgastes o daños en superficies y estructuras.",
    },
    ProcedureStep {
        title: "Verificación Funcional",
        description: "Comprobación del correcto funcionamiento de todos los sistemas. Realización de tests de encendido, calibración automática y verificación de parámetros operativos.",
    },
    ProcedureStep {
        title: "Mediciones y Tests",
        description: "Ejecución de protocolos de control de calidad específicos. Medición de uniformidad, resolución, sensibilidad y otros parámetros técnicos según fabricante.",
    },
    ProcedureStep {
        title: "Limpieza y Ajustes",
        description: "Limpieza de componentes críticos, ajuste de parámetros si necesario y lubricación de partes móviles. Verificación de sistemas de refrigeración y ventilación.",
    },
    ProcedureStep {
        title: "Documentación",
        description: "Registro completo de todas las actividades realizadas, mediciones obtenidas e incidencias detectadas. Actualización del libro de mantenimiento y archivo de certificados.",
    },
    ProcedureStep {
        title: "Verificación Final",
        description: "Comprobación final del correcto funcionamiento tras las intervenciones. Verificación de que todos los parámetros están dentro de especificaciones y autorización para uso clínico.",
    },
];
