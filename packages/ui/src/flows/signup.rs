//! # Signup wizard
//!
//! ```text
//! SelectType --choose--> FillForm --send OTP--> OtpPending --submit--> Submitting
//!     ^                  |    ^                                         |      |
//!     +-------back-------+    +----------------failure------------------+      success: Done
//! ```
//!
//! [`SignupFlow`] owns the form record and applies the transitions; the view
//! runs the async calls ([`request_otp`], [`complete_signup`]) between a
//! `begin_*` call and the matching outcome call.
//!
//! The one-time code is checked with [`OtpService::verify_otp`] before any
//! registration is attempted.

use api::{
    validate, AccountId, Availability, ContactDetails, OrganizationRegistration, OtpError,
    OtpService, PlaceType, Registration, RegistrationService, UserType, ValidationError,
    VolunteerRegistration,
};
use thiserror::Error;

/// Fields only organizations fill in. Raw input strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizationFields {
    pub place_name: String,
    pub location: String,
    pub govt_id: String,
    pub head_count: String,
    /// [`PlaceType::as_str`] value, empty until chosen.
    pub place_type: String,
    pub is_govt_aided: bool,
    pub daily_expense: String,
}

/// Fields only volunteers fill in. Raw input strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VolunteerFields {
    pub location: String,
    /// Comma-separated.
    pub skills: String,
    /// [`Availability::as_str`] value, empty until chosen.
    pub availability: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupFormState {
    pub user_type: Option<UserType>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub organization: OrganizationFields,
    pub volunteer: VolunteerFields,
    pub otp_sent: bool,
    pub otp: String,
}

impl SignupFormState {
    fn clear_type_fields(&mut self) {
        self.organization = OrganizationFields::default();
        self.volunteer = VolunteerFields::default();
    }

    fn contact(&self) -> Result<ContactDetails, ValidationError> {
        ContactDetails {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: self.password.clone(),
        }
        .validate()
    }

    /// Build the typed payload for the chosen account type.
    pub fn to_registration(&self) -> Result<Registration, ValidationError> {
        let Some(user_type) = self.user_type else {
            return Err(ValidationError::UnknownOption("an account type"));
        };
        let contact = self.contact()?;

        Ok(match user_type {
            UserType::Volunteer => {
                let v = &self.volunteer;
                Registration::Volunteer(VolunteerRegistration {
                    contact,
                    location: validate::required("Location", &v.location)?,
                    skills: validate::list("Skills", &v.skills)?,
                    availability: Availability::from_value(&v.availability)
                        .ok_or(ValidationError::UnknownOption("your availability"))?,
                })
            }
            UserType::Organization => {
                let o = &self.organization;
                Registration::Organization(OrganizationRegistration {
                    contact,
                    place_name: validate::required("Place name", &o.place_name)?,
                    location: validate::required("Location", &o.location)?,
                    govt_id: validate::required("Government ID", &o.govt_id)?,
                    head_count: validate::count("Head count", &o.head_count)?,
                    place_type: PlaceType::from_value(&o.place_type)
                        .ok_or(ValidationError::UnknownOption("a place type"))?,
                    is_govt_aided: o.is_govt_aided,
                    daily_expense: validate::amount("Daily expense", &o.daily_expense)?,
                })
            }
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignupStep {
    #[default]
    SelectType,
    FillForm,
    OtpPending,
    Submitting,
    Done(AccountId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupFlow {
    pub step: SignupStep,
    pub form: SignupFormState,
    /// Inline message below the form.
    pub error: Option<String>,
    /// Set while a code request is in flight.
    pub sending_otp: bool,
}

impl SignupFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick an account type. Switching to a different type starts its fields
    /// from scratch.
    pub fn choose(&mut self, user_type: UserType) {
        if self.step == SignupStep::Submitting {
            return;
        }
        if self.form.user_type != Some(user_type) {
            self.form.clear_type_fields();
        }
        self.form.user_type = Some(user_type);
        self.error = None;
        self.step = if self.form.otp_sent {
            SignupStep::OtpPending
        } else {
            SignupStep::FillForm
        };
    }

    /// Back to the type picker, dropping the type and its fields.
    pub fn back(&mut self) {
        if self.step == SignupStep::Submitting {
            return;
        }
        self.form.user_type = None;
        self.form.clear_type_fields();
        self.error = None;
        self.step = SignupStep::SelectType;
    }

    /// Update the phone number. A changed number voids any code already sent.
    pub fn set_phone(&mut self, phone: String) {
        if phone == self.form.phone {
            return;
        }
        self.form.phone = phone;
        if self.form.otp_sent {
            self.form.otp_sent = false;
            self.form.otp.clear();
            if self.step == SignupStep::OtpPending {
                self.step = SignupStep::FillForm;
            }
        }
    }

    pub fn can_send_otp(&self) -> bool {
        matches!(self.step, SignupStep::FillForm | SignupStep::OtpPending) && !self.sending_otp
    }

    pub fn can_submit(&self) -> bool {
        self.step == SignupStep::OtpPending && self.form.otp_sent && !self.sending_otp
    }

    /// Validate the phone and mark a code request as in flight. Returns the
    /// normalised phone to send the code to.
    pub fn begin_send_otp(&mut self) -> Result<String, SignupError> {
        if self.sending_otp || self.step == SignupStep::Submitting {
            return Err(SignupError::Busy);
        }
        if !self.can_send_otp() {
            let err = SignupError::Invalid(ValidationError::UnknownOption("an account type"));
            self.error = Some(err.to_string());
            return Err(err);
        }
        match validate::phone(&self.form.phone) {
            Ok(phone) => {
                self.error = None;
                self.sending_otp = true;
                Ok(phone)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    pub fn otp_sent(&mut self) {
        self.sending_otp = false;
        self.form.otp_sent = true;
        self.form.otp.clear();
        self.step = SignupStep::OtpPending;
    }

    pub fn otp_failed(&mut self, error: &OtpError) {
        self.sending_otp = false;
        self.error = Some(error.to_string());
    }

    /// Validate the whole form and move to `Submitting`. Returns the payload
    /// and the code to verify.
    pub fn begin_submit(&mut self) -> Result<(Registration, String), SignupError> {
        if !self.can_submit() {
            let err = SignupError::OtpNotSent;
            self.error = Some(err.to_string());
            return Err(err);
        }
        let code = self.form.otp.trim().to_string();
        if code.is_empty() {
            let err = SignupError::Invalid(ValidationError::MissingField("Verification code"));
            self.error = Some(err.to_string());
            return Err(err);
        }
        match self.form.to_registration() {
            Ok(registration) => {
                self.error = None;
                self.step = SignupStep::Submitting;
                Ok((registration, code))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// The account exists; the form is discarded.
    pub fn submit_succeeded(&mut self, account_id: AccountId) {
        self.form = SignupFormState::default();
        self.error = None;
        self.step = SignupStep::Done(account_id);
    }

    /// Back to the form. Verification runs before registration and consumes
    /// the code, so every retry starts with a fresh one.
    pub fn submit_failed(&mut self, error: &SignupError) {
        self.error = Some(error.to_string());
        self.form.otp.clear();
        self.form.otp_sent = false;
        self.step = SignupStep::FillForm;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Please request a verification code first")]
    OtpNotSent,
    #[error("Please wait for the current request to finish")]
    Busy,
    #[error("The verification code is incorrect or has expired")]
    InvalidOtp,
}

/// Ask the OTP service for a code.
pub async fn request_otp(phone: &str, otp: &dyn OtpService) -> Result<(), OtpError> {
    otp.request_otp(phone).await
}

/// Verify the code, then register. Registration is never attempted with an
/// unverified code.
pub async fn complete_signup(
    registration: Registration,
    code: &str,
    otp: &dyn OtpService,
    registrations: &dyn RegistrationService,
) -> Result<AccountId, SignupError> {
    let phone = registration.contact().phone.clone();
    if !otp.verify_otp(&phone, code).await {
        return Err(SignupError::InvalidOtp);
    }
    Ok(registrations.register(registration).await?)
}
