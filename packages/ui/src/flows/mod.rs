//! Form state and transitions behind the login and signup views.
//!
//! Nothing in here touches Dioxus: the views keep these records in signals
//! and call the async helpers with the services taken from context.

pub mod login;
pub mod signup;

pub use login::{submit_label, submit_login, LoginError, LoginFormState, LoginPhase};
pub use signup::{
    complete_signup, request_otp, OrganizationFields, SignupError, SignupFlow, SignupFormState,
    SignupStep, VolunteerFields,
};
