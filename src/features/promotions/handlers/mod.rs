pub mod promotion_handler;

pub use promotion_handler::*;
