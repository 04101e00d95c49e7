//! # Adapter Layer

pub mod console;
