use super::{ContactChannel, Icon, SectionHeader, SocialLink};

pub const CONTACT_HEADER: SectionHeader = SectionHeader {
    eyebrow: "Contacto",
    title: "Trabajemos",
    highlight: "Juntos",
    lead: "¿Tienes un proyecto en mente? Estoy disponible para colaborar y crear \
           soluciones innovadoras.",
};

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: Icon::Mail,
        label: "Email",
        value: "lautaro.castellanos.dev@gmail.com",
        href: "mailto:lautaro.castellanos.dev@gmail.com",
    },
    ContactChannel {
        icon: Icon::MapPin,
        label: "Ubicación",
        value: "Argentina,Cordoba",
        href: "#",
    },
    ContactChannel {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        value: "Lautaro Castellanos",
        href: "https://www.linkedin.com/in/lautaro-maximiliano-castellanos-molina/",
    },
];

pub const FOLLOW_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Github,
        label: "GitHub",
        href: "https://github.com/LautaroMol",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/lautaro-maximiliano-castellanos-molina/",
    },
];

/// Copy for the contact panels and form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormCopy {
    pub info_title: &'static str,
    pub follow_title: &'static str,
    pub form_title: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub success_title: &'static str,
    pub success_body: &'static str,
}

pub const FORM_COPY: FormCopy = FormCopy {
    info_title: "Información de contacto",
    follow_title: "Sígueme en",
    form_title: "Envíame un mensaje",
    name_label: "Nombre",
    name_placeholder: "Tu nombre",
    email_label: "Email",
    email_placeholder: "tu@email.com",
    message_label: "Mensaje",
    message_placeholder: "Cuéntame sobre tu proyecto...",
    submit: "Enviar mensaje",
    submitting: "Enviando...",
    success_title: "¡Mensaje enviado!",
    success_body: "Gracias por contactarme. Te responderé pronto.",
};
