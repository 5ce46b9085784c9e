use super::{Accent, ColorTheme, Icon, Link, Project, ProjectLinks, SectionHeader};

pub const PROJECTS_HEADER: SectionHeader = SectionHeader {
    eyebrow: "Portfolio",
    title: "Algunos",
    highlight: "Trabajos",
    lead: "Proyectos desarrollados con pasión y atención al detalle, aplicando las \
           mejores prácticas de desarrollo.",
};

pub const GITHUB_PROFILE: Link = Link {
    label: "Ver más en GitHub",
    href: "https://github.com/LautaroMol",
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "SeasonMedic - Telemedicina",
        description: "Aplicación móvil desarrollada en Ionic con backend .NET con el propósito \
                      de ayudar a la telemedicina. Funciones: -organizar consultas \\n \
                      -permitir pagos -Ingreso biometrico -Historia clinica -Tema claro y \
                      oscuro -Personalizacion de perfil",
        icon: Icon::Smartphone,
        technologies: &[
            "Ionic",
            ".NET",
            "TypeScript",
            "MercadoPago SDK",
            "Cloudinary",
            "JWT",
            "Entity Framework",
            "SQL Server",
        ],
        links: ProjectLinks {
            demo: Some(
                "https://play.google.com/store/apps/details?id=com.seasonmedicapps.seasonmedic",
            ),
            repo: None,
        },
        featured: true,
        theme: ColorTheme {
            gradient_from: Accent::Blue,
            gradient_to: Accent::Cyan,
            icon: Accent::Blue,
        },
    },
    Project {
        title: "Gestor y asistente de viajes",
        description: "Proyecto universitario destinado a dar asistencia y organizar viajes con \
                      carga, desarrollado en .NET 8 y Angular. Funciones: -Organizacion de \
                      viajes -Calculadora de costos -Gestion de cargas -Gestion de vehiculos y \
                      estado -Calculadora de ruta -Seguimiento en tiempo real del viaje",
        icon: Icon::Map,
        technologies: &[
            "ASP.NET",
            "Angular",
            "TypeScript",
            "SQL Server",
            "REST API",
            "JWT",
            "Leaflet",
        ],
        links: ProjectLinks {
            demo: None,
            repo: None,
        },
        featured: false,
        theme: ColorTheme {
            gradient_from: Accent::Emerald,
            gradient_to: Accent::Green,
            icon: Accent::Emerald,
        },
    },
    Project {
        title: "Sistema de Gestión Hotelera",
        description: "Proyecto de gestión de hotel realizado en grupo como trabajo de la \
                      carrera. Funciones: -Gestión de reservas -Check-in y check-out -Gestión \
                      de habitaciones -Reservas a traves del tiempo -Modificacion de equipacion \
                      de la habitacion",
        icon: Icon::Calendar,
        technologies: &[".NET 6", "Blazor", "Bootstrap", "MudBlazor", "SQL Server"],
        links: ProjectLinks {
            demo: None,
            repo: None,
        },
        featured: false,
        theme: ColorTheme {
            gradient_from: Accent::Amber,
            gradient_to: Accent::Orange,
            icon: Accent::Amber,
        },
    },
];
