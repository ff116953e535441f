pub mod console;
pub mod menu;
