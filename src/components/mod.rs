//! UI components for the portfolio page.

pub mod back_to_top;
pub mod contact_form;
pub mod hero;
pub mod navbar;
pub mod section;
