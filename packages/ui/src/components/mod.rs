//! Form primitives shared by the views. Styling lives in `assets/ui.css`,
//! keyed on the `data-component` attribute so callers keep full control of
//! `class`.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::Label;
