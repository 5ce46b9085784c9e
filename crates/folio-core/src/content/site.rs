// Navigation, hero, and footer content.

use super::{Accent, Anchor, Icon, Link, NavItem, SocialLink};

pub const LOGO: NavItem = NavItem {
    label: "LC",
    target: Anchor::Hero,
};

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Inicio",
        target: Anchor::Hero,
    },
    NavItem {
        label: "Tecnologías",
        target: Anchor::Technologies,
    },
    NavItem {
        label: "Proyectos",
        target: Anchor::Projects,
    },
    NavItem {
        label: "Contacto",
        target: Anchor::Contact,
    },
];

pub const NAV_CTA: NavItem = NavItem {
    label: "Hablemos",
    target: Anchor::Contact,
};

// ── Hero ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub badge: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub primary: NavItem,
    pub secondary: NavItem,
    /// The "scroll down" affordance under the fold.
    pub scroll_hint: NavItem,
}

pub const HERO: Hero = Hero {
    badge: "Disponible para proyectos",
    first_name: "Lautaro Maximiliano",
    last_name: "Castellanos Molina",
    role: "Desarrollador FullStack",
    description: "Desarrollador de Software. Programando desde 2019, creo soluciones de \
                  software usando .NET y Angular Tecnologia en servidores: Docker y linux \
                  Debian. Bilingüe español/inglés (B2).",
    primary: NavItem {
        label: "Ver proyectos",
        target: Anchor::Projects,
    },
    secondary: NavItem {
        label: "Contactarme",
        target: Anchor::Contact,
    },
    scroll_hint: NavItem {
        label: "Scroll",
        target: Anchor::Technologies,
    },
};

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/lautaro-maximiliano-castellanos-molina/",
    },
    SocialLink {
        icon: Icon::Github,
        label: "GitHub",
        href: "https://github.com/LautaroMol",
    },
    SocialLink {
        icon: Icon::Mail,
        label: "Email",
        href: "mailto:lautaro.castellanos@example.com",
    },
];

/// Decorative icons drifting behind the hero copy.
pub const FLOATING_ICONS: &[(Icon, Accent)] = &[
    (Icon::Code, Accent::Primary),
    (Icon::Database, Accent::Purple),
    (Icon::Cloud, Accent::Cyan),
];

// ── Footer ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub owner: &'static str,
    /// `{year}` is replaced with the current year.
    pub copyright: &'static str,
    pub made_with: &'static str,
    pub stack: &'static str,
    pub links: &'static [Link],
}

pub const FOOTER: Footer = Footer {
    owner: "Lautaro Castellanos",
    copyright: "© {year} Todos los derechos reservados",
    made_with: "Hecho con",
    stack: "Rust + ratatui",
    links: &[
        Link {
            label: "Inicio",
            href: "#hero",
        },
        Link {
            label: "Proyectos",
            href: "#projects",
        },
        Link {
            label: "Contacto",
            href: "#contact",
        },
    ],
};

impl Footer {
    pub fn copyright_for(&self, year: i32) -> String {
        self.copyright.replace("{year}", &year.to_string())
    }
}
