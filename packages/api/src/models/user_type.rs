use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the platform an account belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Volunteer,
    Organization,
}

impl UserType {
    pub const ALL: [UserType; 2] = [UserType::Volunteer, UserType::Organization];

    /// Human-readable label, as shown on toggles and buttons.
    pub fn label(&self) -> &'static str {
        match self {
            UserType::Volunteer => "Volunteer",
            UserType::Organization => "Organization",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            UserType::Volunteer => "Give your time and skills to children who need them.",
            UserType::Organization => "Register a care home and connect with supporters.",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
