pub mod config;
pub mod design;
pub mod generate;
pub mod info;
pub mod presets;
pub mod prompt;
