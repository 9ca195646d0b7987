mod cards;
mod import;
mod log;
mod review;
pub mod ui;

pub use cards::{add, hardest_card, remove, reset_stats};
pub use import::{export, export_to, import, import_from};
pub use log::log;
pub use review::ask;
