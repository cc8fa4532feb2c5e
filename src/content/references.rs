/// Bibliographic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub authors: &'static str,
    pub title: &'static str,
    pub year: &'static str,
    pub kind: &'static str,
}

pub const REFERENCES: &[Reference] = &[
    Reference {
        authors: "Consejo de Seguridad Nuclear (CSN)",
        title: "Guía de Seguridad 11.4: Criterios de aceptación de instalaciones de medicina nuclear",
        year: "2022",
        kind: "Normativa",
    },
    Reference {
        authors: "International Atomic Energy Agency (IAEA)",
        title: "Quality Assurance for SPECT Systems - IAEA Human Health Series No. 6",
        year: "2021",
        kind: "Guía internacional",
    },
    Reference {
        authors: "Sociedad Española de Física Médica (SEFM)",
        title: "Protocolo español de control de calidad en equipos de medicina nuclear",
        year: "2023",
        kind: "Protocolo",
    },
    Reference {
        authors: "European Association of Nuclear Medicine (EANM)",
        title: "Guidelines for PET/CT Quality Control",
        year: "2022",
        kind: "Guía clínica",
    },
    Reference {
        authors: "Reglamento sobre protección sanitaria contra radiaciones ionizantes",
        title: "Real Decreto 1029/2022 - Ministerio de la Presidencia",
        year: "2022",
        kind: "Normativa española",
    },
    Reference {
        authors: "National Electrical Manufacturers Association (NEMA)",
        title: "Performance Measurements of Positron Emission Tomographs - NEMA NU 2",
        year: "2018",
        kind: "Estándar técnico",
    },
    Reference {
        authors: "Sociedad Española de Medicina Nuclear e Imagen Molecular (SEMNIM)",
        title: "Recomendaciones para garantía de calidad en medicina nuclear",
        year: "2023",
        kind: "Recomendaciones",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const LINKS_OF_INTEREST: &[ReferenceLink] = &[
    ReferenceLink { label: "European Medicines Agency (EMA)", url: "https://www.ema.europa.eu/en/homepage" },
    ReferenceLink { label: "Consejo de Seguridad Nuclear (CSN)", url: "https://www.csn.es/home" },
    ReferenceLink { label: "International Atomic Energy Agency (IAEA)", url: "https://www.iaea.org/es" },
    ReferenceLink { label: "European Association of Nuclear Medicine (EANM)", url: "https://www.eanm.org/" },
    ReferenceLink { label: "International Commission on Radiological Protection (ICRP)", url: "https://www.icrp.org/" },
];
