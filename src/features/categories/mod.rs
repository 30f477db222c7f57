//! Product categories.
//!
//! Categories carry a unique slug derived from their name and are read together
//! with their active subcategories.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/categories` | Create category |
//! | GET | `/api/categories` | List active categories |
//! | GET | `/api/categories/{id}` | Get active category |
//! | GET | `/api/categories/slug/{slug}` | Get active category by slug |
//! | PATCH | `/api/categories/{id}` | Merge-patch update |
//! | DELETE | `/api/categories/{id}` | Soft-delete category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCategoryRepository;
pub use services::CategoryService;
