//! Signup wizard: pick an account type, fill the form, verify the phone,
//! create the account.

use api::{Availability, PlaceType, UserType};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::flows::{complete_signup, request_otp, SignupFlow, SignupStep};
use ui::icons::{FaArrowLeft, FaCircleCheck};
use ui::{use_services, use_site_config, Icon, UserTypeIcon};

use super::Field;
use crate::Route;

#[component]
pub fn Signup() -> Element {
    let flow = use_signal(SignupFlow::new);
    let step = flow.read().step;

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card auth-card--wide",
                match step {
                    SignupStep::SelectType => rsx! { TypePicker { flow } },
                    SignupStep::Done(account_id) => {
                        let account_id = account_id.to_string();
                        rsx! {
                            div {
                                class: "signup-done",
                                Icon { icon: FaCircleCheck, width: 48, height: 48 }
                                h1 { "Your account is ready" }
                                p { "Account ID: " code { "{account_id}" } }
                                Link { to: Route::Login {}, class: "cta-button", "Continue to login" }
                            }
                        }
                    }
                    _ => rsx! { SignupForm { flow } },
                }
            }
        }
    }
}

#[component]
fn TypePicker(flow: Signal<SignupFlow>) -> Element {
    let mut flow = flow;
    let site_name = use_site_config().site.name;

    rsx! {
        div {
            class: "auth-card__header",
            h1 { "Join {site_name}" }
            p { "How would you like to help?" }
        }
        div {
            class: "type-picker",
            for user_type in UserType::ALL {
                button {
                    key: "{user_type}",
                    r#type: "button",
                    class: "type-picker__option",
                    onclick: move |_| flow.write().choose(user_type),
                    UserTypeIcon { user_type, size: 32 }
                    h3 { "{user_type}" }
                    p { {user_type.tagline()} }
                }
            }
        }
        p {
            class: "auth-card__footer",
            "Already have an account? "
            Link { to: Route::Login {}, "Login" }
        }
    }
}

#[component]
fn SignupForm(flow: Signal<SignupFlow>) -> Element {
    let mut flow = flow;
    let services = use_services();
    let otp_services = services.clone();

    let send_otp = move |_: MouseEvent| {
        let started = flow.write().begin_send_otp();
        let Ok(phone) = started else {
            return;
        };
        let services = otp_services.clone();
        spawn(async move {
            let result = request_otp(&phone, services.otp.as_ref()).await;
            match result {
                Ok(()) => {
                    tracing::info!("verification code requested");
                    flow.write().otp_sent();
                }
                Err(e) => {
                    tracing::warn!("Could not send code: {}", e);
                    flow.write().otp_failed(&e);
                }
            }
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let started = flow.write().begin_submit();
        let Ok((registration, code)) = started else {
            return;
        };
        let services = services.clone();
        spawn(async move {
            let user_type = registration.user_type();
            let result = complete_signup(
                registration,
                &code,
                services.otp.as_ref(),
                services.registration.as_ref(),
            )
            .await;
            match result {
                Ok(account_id) => {
                    tracing::info!(%account_id, %user_type, "signed up");
                    flow.write().submit_succeeded(account_id);
                }
                Err(e) => {
                    tracing::warn!("Signup failed: {}", e);
                    flow.write().submit_failed(&e);
                }
            }
        });
    };

    let state = flow();
    let Some(user_type) = state.form.user_type else {
        return rsx! {};
    };
    let busy = state.step == SignupStep::Submitting;
    let can_send = state.can_send_otp();
    let can_submit = state.can_submit();
    let sending = state.sending_otp;
    let otp_sent = state.form.otp_sent;
    let form = state.form;
    let error = state.error;
    let send_label = match (sending, otp_sent) {
        (true, _) => "Sending...",
        (false, true) => "Resend code",
        (false, false) => "Send OTP",
    };
    let submit_text = if busy { "Creating account..." } else { "Create account" };

    rsx! {
        div {
            class: "auth-card__header",
            button {
                r#type: "button",
                class: "back-link",
                disabled: busy,
                onclick: move |_| flow.write().back(),
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                " Change account type"
            }
            UserTypeIcon { user_type, size: 36 }
            h1 { "Sign up as {user_type}" }
        }

        form {
            class: "auth-form",
            onsubmit: handle_submit,

            Field {
                id: "signup-name",
                label: "Full name",
                Input {
                    id: "signup-name",
                    r#type: "text",
                    required: true,
                    autocomplete: "name",
                    disabled: busy,
                    value: form.full_name,
                    oninput: move |evt: FormEvent| flow.write().form.full_name = evt.value(),
                }
            }

            Field {
                id: "signup-email",
                label: "Email",
                Input {
                    id: "signup-email",
                    r#type: "email",
                    required: true,
                    autocomplete: "email",
                    disabled: busy,
                    value: form.email,
                    oninput: move |evt: FormEvent| flow.write().form.email = evt.value(),
                }
            }

            Field {
                id: "signup-phone",
                label: "Phone number",
                div {
                    class: "field__inline",
                    Input {
                        id: "signup-phone",
                        r#type: "tel",
                        required: true,
                        autocomplete: "tel",
                        disabled: busy,
                        value: form.phone,
                        oninput: move |evt: FormEvent| flow.write().set_phone(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        r#type: "button",
                        disabled: !can_send,
                        onclick: send_otp,
                        "{send_label}"
                    }
                }
            }

            Field {
                id: "signup-password",
                label: "Password",
                Input {
                    id: "signup-password",
                    r#type: "password",
                    required: true,
                    minlength: api::validate::MIN_PASSWORD_LEN as i64,
                    autocomplete: "new-password",
                    disabled: busy,
                    value: form.password,
                    oninput: move |evt: FormEvent| flow.write().form.password = evt.value(),
                }
            }

            match user_type {
                UserType::Organization => rsx! { OrganizationSection { flow, busy } },
                UserType::Volunteer => rsx! { VolunteerSection { flow, busy } },
            }

            if otp_sent {
                Field {
                    id: "signup-otp",
                    label: "Verification code",
                    Input {
                        id: "signup-otp",
                        r#type: "text",
                        inputmode: "numeric",
                        required: true,
                        autocomplete: "one-time-code",
                        disabled: busy,
                        value: form.otp,
                        oninput: move |evt: FormEvent| flow.write().form.otp = evt.value(),
                    }
                    p { class: "field__hint", "Enter the code we sent to your phone." }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "auth-form__submit",
                r#type: "submit",
                disabled: !can_submit,
                "{submit_text}"
            }
        }

        if let Some(err) = error {
            div {
                class: "form-error",
                role: "alert",
                "{err}"
            }
        }
    }
}

#[component]
fn OrganizationSection(flow: Signal<SignupFlow>, busy: bool) -> Element {
    let mut flow = flow;
    let fields = flow.read().form.organization.clone();

    rsx! {
        fieldset {
            class: "signup-section",
            legend { "About your organization" }

            Field {
                id: "org-place-name",
                label: "Place name",
                Input {
                    id: "org-place-name",
                    r#type: "text",
                    required: true,
                    disabled: busy,
                    value: fields.place_name,
                    oninput: move |evt: FormEvent| flow.write().form.organization.place_name = evt.value(),
                }
            }

            Field {
                id: "org-location",
                label: "Location",
                Input {
                    id: "org-location",
                    r#type: "text",
                    required: true,
                    disabled: busy,
                    value: fields.location,
                    oninput: move |evt: FormEvent| flow.write().form.organization.location = evt.value(),
                }
            }

            Field {
                id: "org-govt-id",
                label: "Government ID",
                Input {
                    id: "org-govt-id",
                    r#type: "text",
                    required: true,
                    disabled: busy,
                    value: fields.govt_id,
                    oninput: move |evt: FormEvent| flow.write().form.organization.govt_id = evt.value(),
                }
            }

            Field {
                id: "org-place-type",
                label: "Place type",
                select {
                    id: "org-place-type",
                    class: "select",
                    required: true,
                    disabled: busy,
                    value: fields.place_type,
                    onchange: move |evt: FormEvent| flow.write().form.organization.place_type = evt.value(),
                    option { value: "", "Select place type" }
                    for place_type in PlaceType::ALL {
                        option {
                            key: "{place_type:?}",
                            value: place_type.as_str(),
                            {place_type.label()}
                        }
                    }
                }
            }

            div {
                class: "field-row",
                Field {
                    id: "org-head-count",
                    label: "Number of children",
                    Input {
                        id: "org-head-count",
                        r#type: "number",
                        min: "1",
                        required: true,
                        disabled: busy,
                        value: fields.head_count,
                        oninput: move |evt: FormEvent| flow.write().form.organization.head_count = evt.value(),
                    }
                }
                Field {
                    id: "org-daily-expense",
                    label: "Daily expense",
                    Input {
                        id: "org-daily-expense",
                        r#type: "number",
                        min: "0",
                        required: true,
                        disabled: busy,
                        value: fields.daily_expense,
                        oninput: move |evt: FormEvent| flow.write().form.organization.daily_expense = evt.value(),
                    }
                }
            }

            label {
                class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: fields.is_govt_aided,
                    disabled: busy,
                    onchange: move |_| {
                        let mut flow = flow.write();
                        let aided = &mut flow.form.organization.is_govt_aided;
                        *aided = !*aided;
                    },
                }
                " Government aided"
            }
        }
    }
}

#[component]
fn VolunteerSection(flow: Signal<SignupFlow>, busy: bool) -> Element {
    let mut flow = flow;
    let fields = flow.read().form.volunteer.clone();

    rsx! {
        fieldset {
            class: "signup-section",
            legend { "About you" }

            Field {
                id: "vol-location",
                label: "Location",
                Input {
                    id: "vol-location",
                    r#type: "text",
                    required: true,
                    disabled: busy,
                    value: fields.location,
                    oninput: move |evt: FormEvent| flow.write().form.volunteer.location = evt.value(),
                }
            }

            Field {
                id: "vol-skills",
                label: "Skills",
                Input {
                    id: "vol-skills",
                    r#type: "text",
                    required: true,
                    placeholder: "Teaching, cooking, music",
                    disabled: busy,
                    value: fields.skills,
                    oninput: move |evt: FormEvent| flow.write().form.volunteer.skills = evt.value(),
                }
                p { class: "field__hint", "Separate skills with commas." }
            }

            Field {
                id: "vol-availability",
                label: "Availability",
                select {
                    id: "vol-availability",
                    class: "select",
                    required: true,
                    disabled: busy,
                    value: fields.availability,
                    onchange: move |evt: FormEvent| flow.write().form.volunteer.availability = evt.value(),
                    option { value: "", "Select availability" }
                    for availability in Availability::ALL {
                        option {
                            key: "{availability:?}",
                            value: availability.as_str(),
                            {availability.label()}
                        }
                    }
                }
            }
        }
    }
}
