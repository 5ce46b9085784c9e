use super::{Accent, ColorTheme, ExtraSkill, Icon, SectionHeader, TechCategory};

pub const TECH_HEADER: SectionHeader = SectionHeader {
    eyebrow: "Stack Tecnológico",
    title: "Mis",
    highlight: "Tecnologías",
    lead: "Experiencia sólida en el desarrollo full-stack con tecnologías modernas y \
           mejores prácticas de la industria.",
};

pub const TECH_CATEGORIES: &[TechCategory] = &[
    TechCategory {
        icon: Icon::Server,
        title: "Backend",
        description: "Desarrollo de APIs robustas en .NET 8, 10  y ASP.NET Core, integración \
                      con bases de datos SQL Server.",
        skills: &[
            ".NET 8",
            "ASP.NET Core",
            "SQL Server",
            "JWT",
            "Entity Framework",
            "REST APIs",
        ],
        theme: ColorTheme {
            gradient_from: Accent::Blue,
            gradient_to: Accent::Cyan,
            icon: Accent::Blue,
        },
    },
    TechCategory {
        icon: Icon::Layout,
        title: "Frontend",
        description: "Creación de interfaces intuitivas y responsivas con Angular e Ionic. \
                      Formularios validados y UX fluido.",
        skills: &[
            "Angular",
            "Ionic",
            "TypeScript",
            "Tailwind CSS",
            "RxJS",
            "Blazor",
        ],
        theme: ColorTheme {
            gradient_from: Accent::Purple,
            gradient_to: Accent::Pink,
            icon: Accent::Purple,
        },
    },
    TechCategory {
        icon: Icon::Cloud,
        title: "DevOps & Cloud",
        description: "Configuración de entornos en Linux con Docker, NGINX y SSL.",
        skills: &["Docker", "NGINX", "Linux", "CI/CD", "SSL/Let's Encrypt"],
        theme: ColorTheme {
            gradient_from: Accent::Cyan,
            gradient_to: Accent::Teal,
            icon: Accent::Cyan,
        },
    },
];

pub const EXTRA_SKILLS: &[ExtraSkill] = &[
    ExtraSkill {
        icon: Icon::Database,
        label: "Bases de Datos",
        items: "SQL Server",
    },
    ExtraSkill {
        icon: Icon::Shield,
        label: "Seguridad",
        items: "JWT, HTTPS",
    },
    ExtraSkill {
        icon: Icon::Zap,
        label: "Performance",
        items: "Caching, Optimization",
    },
];
