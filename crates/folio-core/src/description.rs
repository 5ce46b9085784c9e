//! Project description parsing.
//!
//! Project entries keep their feature list inline in the description text:
//! a summary, the `Funciones:` marker, then hyphen bullets. Some entries
//! also carry a literal `\n` escape left over from hand-edited content.

/// Marker separating the summary from the feature bullets.
pub const FEATURES_MARKER: &str = "Funciones:";

/// The literal two-character escape sequence stripped from bullets.
const LITERAL_NEWLINE: &str = "\\n";

/// A description split into its summary and feature bullets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDescription {
    pub summary: String,
    pub features: Vec<String>,
}

impl ProjectDescription {
    pub fn has_features(&self) -> bool {
        !self.features.is_empty()
    }
}

/// Split a raw description on the first [`FEATURES_MARKER`].
///
/// Without the marker the whole trimmed text is the summary. A hyphen only
/// opens a bullet at the start of the clause or after whitespace, so
/// hyphenated words ("Check-in") stay whole.
pub fn parse_description(raw: &str) -> ProjectDescription {
    let Some((summary, clause)) = raw.split_once(FEATURES_MARKER) else {
        return ProjectDescription {
            summary: raw.trim().to_owned(),
            features: Vec::new(),
        };
    };

    let clause = clause.replace(LITERAL_NEWLINE, " ");
    let features = split_bullets(&clause)
        .into_iter()
        .filter_map(clean_bullet)
        .collect();

    ProjectDescription {
        summary: summary.trim().to_owned(),
        features,
    }
}

fn split_bullets(clause: &str) -> Vec<&str> {
    let mut bullets = Vec::new();
    let mut start = 0;
    let mut after_space = true;

    for (i, c) in clause.char_indices() {
        if c == '-' && after_space {
            bullets.push(&clause[start..i]);
            start = i + c.len_utf8();
        }
        after_space = c.is_whitespace();
    }
    bullets.push(&clause[start..]);
    bullets
}

fn clean_bullet(bullet: &str) -> Option<String> {
    let trimmed = bullet.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn features(raw: &str) -> Vec<String> {
        parse_description(raw).features
    }

    #[test]
    fn splits_summary_and_features() {
        let parsed = parse_description("Una app. Funciones: -item1\\n-item2");
        assert_eq!(parsed.summary, "Una app.");
        assert_eq!(parsed.features, vec!["Item1", "Item2"]);
    }

    #[test]
    fn no_marker_keeps_full_text() {
        let parsed = parse_description("  Solo texto, sin lista -de nada.  ");
        assert_eq!(parsed.summary, "Solo texto, sin lista -de nada.");
        assert!(!parsed.has_features());
    }

    #[test]
    fn hyphenated_words_survive() {
        assert_eq!(
            features("Hotel. Funciones: -Gestión de reservas -Check-in y check-out"),
            vec!["Gestión de reservas", "Check-in y check-out"]
        );
    }

    #[test]
    fn drops_empty_bullets() {
        assert_eq!(features("X Funciones: - - -uno  -"), vec!["Uno"]);
        assert!(features("X Funciones:").is_empty());
        assert!(features("X Funciones:   \\n  ").is_empty());
    }

    #[test]
    fn capitalizes_non_ascii_first_letter() {
        assert_eq!(features("X Funciones: -ñandú -évaluer"), vec!["Ñandú", "Évaluer"]);
    }

    #[test]
    fn splits_only_on_first_marker() {
        let parsed = parse_description("A Funciones: -uno Funciones: -dos");
        assert_eq!(parsed.summary, "A");
        assert_eq!(parsed.features, vec!["Uno Funciones:", "Dos"]);
    }

    #[test]
    fn parses_telemedicine_entry() {
        let raw = "Aplicación móvil desarrollada en Ionic con backend .NET con el propósito de \
                   ayudar a la telemedicina. Funciones: -organizar consultas \\n -permitir pagos \
                   -Ingreso biometrico -Historia clinica -Tema claro y oscuro -Personalizacion de perfil";
        let parsed = parse_description(raw);
        assert!(parsed.summary.ends_with("telemedicina."));
        assert_eq!(
            parsed.features,
            vec![
                "Organizar consultas",
                "Permitir pagos",
                "Ingreso biometrico",
                "Historia clinica",
                "Tema claro y oscuro",
                "Personalizacion de perfil",
            ]
        );
    }

    #[test]
    fn parsing_is_deterministic() {
        let raw = "Resumen. Funciones: -a -b";
        assert_eq!(parse_description(raw), parse_description(raw));
    }
}
