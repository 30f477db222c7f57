pub mod brand_repository;

pub use brand_repository::PgBrandRepository;
