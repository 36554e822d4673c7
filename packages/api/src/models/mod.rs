//! Data models shared by the services and the UI.

mod account;
mod registration;
mod user_type;

pub use account::{AccountId, Credentials, Session};
pub use registration::{
    Availability, ContactDetails, OrganizationRegistration, PlaceType, Registration,
    VolunteerRegistration,
};
pub use user_type::UserType;
