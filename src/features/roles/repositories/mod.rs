pub mod role_repository;

pub use role_repository::PgRoleRepository;
