use std::fmt;

/// What a form submission will do. `Viewing` means no form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Viewing,
    CreatingNew,
    EditingSelected,
}

impl Mode {
    pub fn form_title(self) -> &'static str {
        match self {
            Mode::Viewing => "",
            Mode::CreatingNew => "New user",
            Mode::EditingSelected => "Edit user",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Viewing => write!(f, "VIEW"),
            Mode::CreatingNew => write!(f, "NEW"),
            Mode::EditingSelected => write!(f, "EDIT"),
        }
    }
}
