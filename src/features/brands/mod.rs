//! Brand management.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/brands` | Create brand |
//! | GET | `/api/brands` | List active brands |
//! | GET | `/api/brands/{id}` | Get active brand |
//! | PATCH | `/api/brands/{id}` | Merge-patch update |
//! | DELETE | `/api/brands/{id}` | Soft-delete brand |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgBrandRepository;
pub use services::BrandService;
