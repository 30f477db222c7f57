pub mod brands;
pub mod categories;
pub mod promotions;
pub mod roles;
pub mod subcategories;
