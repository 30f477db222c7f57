pub mod promotion_dto;

pub use promotion_dto::{CreatePromotionDto, PromotionResponseDto, UpdatePromotionDto};
