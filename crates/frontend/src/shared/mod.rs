pub mod config;
pub mod icons;
