//! Reusable UI components for the MirrorLingo page.

pub mod analysis_view;
pub mod client_only;
pub mod home_content;
pub mod phrase_input;
