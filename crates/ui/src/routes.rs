/// Where the session goes next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    RoleSelect,
    Student { name: String },
    Admin,
    Exit,
}

/// Outcome of a single menu action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    /// `2` selects admin; any other answer signs in as a student.
    #[must_use]
    pub fn from_choice(raw: &str) -> Self {
        if raw.trim() == "2" {
            Self::Admin
        } else {
            Self::Student
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudentAction {
    ReadPassage,
    ViewProgress,
    Exit,
}

impl StudentAction {
    #[must_use]
    pub fn from_choice(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::ReadPassage),
            "2" => Some(Self::ViewProgress),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminAction {
    AddPassage,
    ListPassages,
    DeletePassage,
    Ranking,
    Exit,
}

impl AdminAction {
    #[must_use]
    pub fn from_choice(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::AddPassage),
            "2" => Some(Self::ListPassages),
            "3" => Some(Self::DeletePassage),
            "4" => Some(Self::Ranking),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_student() {
        assert_eq!(Role::from_choice("2"), Role::Admin);
        assert_eq!(Role::from_choice("1"), Role::Student);
        assert_eq!(Role::from_choice("x"), Role::Student);
    }

    #[test]
    fn menu_choices_parse() {
        assert_eq!(StudentAction::from_choice(" 3"), Some(StudentAction::Exit));
        assert_eq!(StudentAction::from_choice("4"), None);
        assert_eq!(AdminAction::from_choice("4"), Some(AdminAction::Ranking));
        assert_eq!(AdminAction::from_choice("6"), None);
    }
}
