//! Small reusable drawing helpers

pub mod button;
pub mod popup;
