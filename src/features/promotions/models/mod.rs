pub mod promotion;

pub use promotion::{check_discount_terms, DiscountType, NewPromotion, Promotion};
