//! Core module - Configuration, preferences, and input events

pub mod config;
pub mod events;
pub mod settings;
