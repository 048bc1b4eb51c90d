use super::validators::{
    validate_address,
    validate_email,
    validate_name,
    validate_phone,
};

pub const INVALID_INPUT_TEXT: &str = "Invalid input";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Surname,
    Email,
    Phone,
    Address,
    Message,
}

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Name,
        FieldKind::Surname,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::Address,
        FieldKind::Message,
    ];

    /// Fields whose validity gates the submit button.
    pub const GATED: [FieldKind; 5] = [
        FieldKind::Name,
        FieldKind::Surname,
        FieldKind::Email,
        FieldKind::Address,
        FieldKind::Phone,
    ];

    /// Position in [`FieldKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Surname => "Surname",
            FieldKind::Email => "Email",
            FieldKind::Phone => "Phone number",
            FieldKind::Address => "Address",
            FieldKind::Message => "Message",
        }
    }

    pub fn validator(&self) -> Option<fn(&str) -> bool> {
        match self {
            FieldKind::Name | FieldKind::Surname => Some(validate_name),
            FieldKind::Email => Some(validate_email),
            FieldKind::Phone => Some(validate_phone),
            FieldKind::Address => Some(validate_address),
            FieldKind::Message => None,
        }
    }

    pub fn is_valid(&self, value: &str) -> bool {
        self.validator().map_or(true, |validate| validate(value.trim()))
    }
}

/// Visual state of an input, i.e. which CSS-like class it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVisual {
    Untouched,
    Valid,
    Error,
}

impl FieldVisual {
    pub fn error_text(&self) -> Option<&'static str> {
        match self {
            FieldVisual::Error => Some(INVALID_INPUT_TEXT),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldState {
    pub kind: FieldKind,
    pub value: String,
    pub is_valid: bool,
    pub touched: bool,
}

impl FieldState {
    pub fn new(kind: FieldKind) -> Self {
        Self { kind, value: String::new(), is_valid: kind.is_valid(""), touched: false }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.is_valid = self.kind.is_valid(&self.value);
        self.touched = true;
    }

    pub fn visual(&self) -> FieldVisual {
        match (self.touched, self.kind.validator().is_some(), self.is_valid) {
            (false, _, _) | (_, false, _) => FieldVisual::Untouched,
            (true, true, true) => FieldVisual::Valid,
            (true, true, false) => FieldVisual::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_fields_show_nothing() {
        let field = FieldState::new(FieldKind::Name);
        assert!(!field.is_valid);
        assert_eq!(field.visual(), FieldVisual::Untouched);
        assert_eq!(field.visual().error_text(), None);
    }

    #[test]
    fn value_is_trimmed_before_validation() {
        let mut field = FieldState::new(FieldKind::Email);
        field.set_value("  a@b.lt  ");
        assert!(field.is_valid);
        assert_eq!(field.visual(), FieldVisual::Valid);

        field.set_value("nope");
        assert_eq!(field.visual(), FieldVisual::Error);
        assert_eq!(field.visual().error_text(), Some(INVALID_INPUT_TEXT));
    }

    #[test]
    fn message_never_shows_error() {
        let mut field = FieldState::new(FieldKind::Message);
        field.set_value("");
        assert!(field.is_valid);
        assert_eq!(field.visual(), FieldVisual::Untouched);
    }
}
