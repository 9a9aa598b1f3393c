pub mod config;
pub mod consts;
pub mod design;
pub mod error;
pub mod generate;
pub mod io;
pub mod presets;
pub mod prompt;
pub mod session;
pub mod slider;
