//! Reusable UI components for the gallery

pub mod text_field;
