mod comparison;
pub mod controls;
pub mod header;
mod helpers;
pub mod menu_bar;
pub mod status;
pub mod viewport;
