//! # Registration payloads
//!
//! Typed, validated counterparts of the signup form. The UI builds them from
//! raw input strings, the registration service re-validates them on receipt.
//!
//! | Type | Fields |
//! |------|--------|
//! | [`ContactDetails`] | full name, email, phone, password (common to both account types) |
//! | [`VolunteerRegistration`] | contact, location, skills, availability |
//! | [`OrganizationRegistration`] | contact, place name, location, government id, head count, place type, government aid flag, daily expense |

use serde::{Deserialize, Serialize};

use super::UserType;
use crate::error::ValidationError;
use crate::validate;

/// Kind of care facility an organization runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceType {
    Orphanage,
    ShelterHome,
    FosterCareCentre,
    Other,
}

impl PlaceType {
    pub const ALL: [PlaceType; 4] = [
        PlaceType::Orphanage,
        PlaceType::ShelterHome,
        PlaceType::FosterCareCentre,
        PlaceType::Other,
    ];

    /// Stable form value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Orphanage => "orphanage",
            PlaceType::ShelterHome => "shelter_home",
            PlaceType::FosterCareCentre => "foster_care_centre",
            PlaceType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaceType::Orphanage => "Orphanage",
            PlaceType::ShelterHome => "Shelter home",
            PlaceType::FosterCareCentre => "Foster care centre",
            PlaceType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// When a volunteer can help.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Weekdays,
    Weekends,
    Flexible,
}

impl Availability {
    pub const ALL: [Availability; 3] = [
        Availability::Weekdays,
        Availability::Weekends,
        Availability::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Weekdays => "weekdays",
            Availability::Weekends => "weekends",
            Availability::Flexible => "flexible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::Weekdays => "Weekdays",
            Availability::Weekends => "Weekends",
            Availability::Flexible => "Flexible",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }
}

/// Fields every account type shares.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl std::fmt::Debug for ContactDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactDetails")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .finish_non_exhaustive()
    }
}

impl ContactDetails {
    /// Check every field, returning a normalised copy.
    pub fn validate(&self) -> Result<Self, ValidationError> {
        Ok(Self {
            full_name: validate::required("Full name", &self.full_name)?,
            email: validate::email(&self.email)?,
            phone: validate::phone(&self.phone)?,
            password: validate::new_password(&self.password)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerRegistration {
    pub contact: ContactDetails,
    pub location: String,
    pub skills: Vec<String>,
    pub availability: Availability,
}

impl VolunteerRegistration {
    pub fn validate(&self) -> Result<Self, ValidationError> {
        let skills: Vec<String> = self
            .skills
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if skills.is_empty() {
            return Err(ValidationError::MissingField("Skills"));
        }
        Ok(Self {
            contact: self.contact.validate()?,
            location: validate::required("Location", &self.location)?,
            skills,
            availability: self.availability,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationRegistration {
    pub contact: ContactDetails,
    pub place_name: String,
    pub location: String,
    pub govt_id: String,
    pub head_count: u32,
    pub place_type: PlaceType,
    pub is_govt_aided: bool,
    /// Whole currency units per day.
    pub daily_expense: u64,
}

impl OrganizationRegistration {
    pub fn validate(&self) -> Result<Self, ValidationError> {
        if self.head_count == 0 {
            return Err(ValidationError::InvalidNumber("Head count"));
        }
        Ok(Self {
            contact: self.contact.validate()?,
            place_name: validate::required("Place name", &self.place_name)?,
            location: validate::required("Location", &self.location)?,
            govt_id: validate::required("Government ID", &self.govt_id)?,
            head_count: self.head_count,
            place_type: self.place_type,
            is_govt_aided: self.is_govt_aided,
            daily_expense: self.daily_expense,
        })
    }
}

/// A complete signup, tagged by account type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "user_type", rename_all = "lowercase")]
pub enum Registration {
    Volunteer(VolunteerRegistration),
    Organization(OrganizationRegistration),
}

impl Registration {
    pub fn user_type(&self) -> UserType {
        match self {
            Registration::Volunteer(_) => UserType::Volunteer,
            Registration::Organization(_) => UserType::Organization,
        }
    }

    pub fn contact(&self) -> &ContactDetails {
        match self {
            Registration::Volunteer(v) => &v.contact,
            Registration::Organization(o) => &o.contact,
        }
    }

    /// Name shown once the account exists: the person for volunteers, the
    /// place for organizations.
    pub fn display_name(&self) -> &str {
        match self {
            Registration::Volunteer(v) => &v.contact.full_name,
            Registration::Organization(o) => &o.place_name,
        }
    }

    pub fn validate(&self) -> Result<Self, ValidationError> {
        Ok(match self {
            Registration::Volunteer(v) => Registration::Volunteer(v.validate()?),
            Registration::Organization(o) => Registration::Organization(o.validate()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactDetails {
        ContactDetails {
            full_name: " Asha Rao ".to_string(),
            email: "Asha@Example.org".to_string(),
            phone: "+91 98765 43210".to_string(),
            password: "correct horse".to_string(),
        }
    }

    #[test]
    fn test_contact_is_normalised() {
        let c = contact().validate().unwrap();
        assert_eq!(c.full_name, "Asha Rao");
        assert_eq!(c.email, "asha@example.org");
        assert_eq!(c.phone, "+919876543210");
        assert_eq!(c.password, "correct horse");
    }

    #[test]
    fn test_volunteer_requires_a_skill() {
        let reg = VolunteerRegistration {
            contact: contact(),
            location: "Pune".to_string(),
            skills: vec!["  ".to_string()],
            availability: Availability::Weekends,
        };
        assert_eq!(reg.validate(), Err(ValidationError::MissingField("Skills")));
    }

    #[test]
    fn test_organization_rejects_zero_children() {
        let reg = OrganizationRegistration {
            contact: contact(),
            place_name: "Sunrise Home".to_string(),
            location: "Chennai".to_string(),
            govt_id: "TN-1234".to_string(),
            head_count: 0,
            place_type: PlaceType::Orphanage,
            is_govt_aided: true,
            daily_expense: 4000,
        };
        assert_eq!(
            reg.validate(),
            Err(ValidationError::InvalidNumber("Head count"))
        );
    }

    #[test]
    fn test_registration_accessors() {
        let reg = Registration::Organization(OrganizationRegistration {
            contact: contact(),
            place_name: "Sunrise Home".to_string(),
            location: "Chennai".to_string(),
            govt_id: "TN-1234".to_string(),
            head_count: 40,
            place_type: PlaceType::ShelterHome,
            is_govt_aided: false,
            daily_expense: 4000,
        });
        assert_eq!(reg.user_type(), UserType::Organization);
        assert_eq!(reg.display_name(), "Sunrise Home");
        assert_eq!(reg.contact().email, "Asha@Example.org");
    }

    #[test]
    fn test_option_values_round_trip() {
        for place in PlaceType::ALL {
            assert_eq!(PlaceType::from_value(place.as_str()), Some(place));
        }
        assert_eq!(Availability::from_value("weekends"), Some(Availability::Weekends));
        assert_eq!(Availability::from_value(""), None);
    }
}
