pub mod brand_handler;

pub use brand_handler::*;
