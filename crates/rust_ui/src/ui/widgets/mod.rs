//! Stock widgets

mod button;
mod label;

pub use button::Button;
pub use label::Label;
