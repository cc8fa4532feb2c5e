use super::{ContentItem, Icon, DOCUMENTS_IMAGE, HERO_IMAGE};

pub const SUMMARY: &[ContentItem] = &[
    ContentItem {
        id: "resumen-conclusiones-resumen",
        title: "Resumen",
        summary: "Visión de conjunto del programa de mantenimiento de la sala de exploración.",
        icon: Icon::FileCheck,
        image: DOCUMENTS_IMAGE,
        details: &[
            "Esta sección proporciona un resumen ejecutivo del programa de mantenimiento en medicina nuclear, destacando los aspectos más relevantes del equipamiento, protocolos y procedimientos establecidos.",
            "El programa abarca el equipamiento sanitario, electromédico e informático, la gestión del material fungible y no fungible, la puesta en marcha diaria de gammacámara y PET, y las actividades con generador y activímetro.",
            "La protección radiológica y la documentación completan el ciclo, asegurando la trazabilidad de cada intervención.",
        ],
    },
    ContentItem {
        id: "resumen-conclusiones-conclusiones",
        title: "Conclusiones",
        summary: "Lo que aporta un mantenimiento sistemático a la calidad y la seguridad del servicio.",
        icon: Icon::CircleCheck,
        image: HERO_IMAGE,
        details: &[
            "La implementación de un programa integral de mantenimiento es fundamental para garantizar la operatividad y seguridad del servicio de medicina nuclear.",
            "El cumplimiento riguroso de los protocolos establecidos asegura la calidad asistencial, la protección radiológica del personal y pacientes, y el óptimo funcionamiento de los equipos.",
        ],
    },
];

pub const KEY_POINTS: &[&str] = &[
    "Mantenimiento preventivo programado según normativa vigente",
    "Protocolos de protección radiológica actualizados",
    "Control de calidad continuo en equipos críticos",
    "Documentación completa y trazabilidad de todas las actividades",
];
