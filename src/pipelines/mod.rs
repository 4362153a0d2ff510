pub mod batch;
pub mod recipe;

pub use batch::{load_menu, parse_menu, write_failures, BatchRunner, FixedDelay, Throttle};
pub use recipe::scrape_recipe;
