extern crate core;

pub mod errors;
pub mod i18n;
pub mod state;
pub mod ui;
pub mod utils;

pub const APP_NAME: &str = "Querybench";
