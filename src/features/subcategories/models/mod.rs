pub mod subcategory;

pub use subcategory::Subcategory;
