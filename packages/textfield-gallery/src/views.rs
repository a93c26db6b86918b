//! View modules for the gallery

pub mod gallery;
