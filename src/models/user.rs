//! User records returned by the Users category.

/// A single user as shown on a user card.
///
/// Records are immutable once built: fields are private and only readable
/// through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserRecord {
    id: u32,
    name: String,
    email: String,
    department: String,
    active: bool,
}

impl UserRecord {
    /// Build a user record.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            department: department.into(),
            active,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Badge text for the user card.
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }
}
