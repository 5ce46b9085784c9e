// Form fields and browser-style validation.

use strum::Display;

/// Input fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[strum(to_string = "Nombre")]
    Name,
    #[strum(to_string = "Email")]
    Email,
    #[strum(to_string = "Mensaje")]
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }

    /// Whether the field takes multi-line input.
    pub fn is_multiline(self) -> bool {
        self == Self::Message
    }
}

/// Why a submission was refused before reaching the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    MalformedEmail,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            Self::Required(field) => field,
            Self::MalformedEmail => Field::Email,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Required(_) => "Completa este campo.",
            Self::MalformedEmail => "Introduce una dirección de correo válida.",
        }
    }
}

/// The visitor's draft message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// First problem in tab order, if any.
    pub fn validate(&self) -> Result<(), FieldError> {
        for field in Field::ALL {
            if self.get(field).trim().is_empty() {
                return Err(FieldError::Required(field));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(FieldError::MalformedEmail);
        }
        Ok(())
    }
}

/// `local@domain` in the shape browsers accept for `type=email` inputs.
pub fn is_valid_email(raw: &str) -> bool {
    const LOCAL_SPECIALS: &str = ".!#$%&'*+/=?^_`{|}~-";

    let Some((local, domain)) = raw.trim().split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c));

    local_ok
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled() -> FormState {
        FormState {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            message: "Hola".into(),
        }
    }

    #[test]
    fn set_merges_one_field() {
        let mut form = filled();
        form.set(Field::Message, "Otro mensaje");
        assert_eq!(
            form,
            FormState {
                message: "Otro mensaje".into(),
                ..filled()
            }
        );
    }

    #[test]
    fn required_fields_in_tab_order() {
        assert_eq!(FormState::default().validate(), Err(FieldError::Required(Field::Name)));

        let mut form = filled();
        form.email = "  ".into();
        assert_eq!(form.validate(), Err(FieldError::Required(Field::Email)));

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.validate(), Err(FieldError::Required(Field::Message)));

        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn malformed_email_is_refused() {
        let mut form = filled();
        form.email = "ana.example.com".into();
        assert_eq!(form.validate(), Err(FieldError::MalformedEmail));
        assert_eq!(FieldError::MalformedEmail.field(), Field::Email);
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b", "ana.perez+dev@mail.example.com", "x_y@sub-domain.ar"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in ["", "@b.com", "a@", "a@@b", "a b@c.com", "a@-b.com", "a@b..com", "a@b_c.com"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn field_cycle() {
        assert_eq!(Field::Name.next(), Field::Email);
        assert_eq!(Field::Message.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::Message);
        assert_eq!(Field::Email.to_string(), "Email");
        assert_eq!(Field::Name.to_string(), "Nombre");
    }
}
