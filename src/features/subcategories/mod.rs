//! Subcategory management. Every subcategory belongs to one category.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/subcategories` | Create subcategory under an active category |
//! | GET | `/api/subcategories` | List active subcategories |
//! | GET | `/api/subcategories/{id}` | Get active subcategory |
//! | GET | `/api/subcategories/slug/{slug}` | Get active subcategory by slug |
//! | PATCH | `/api/subcategories/{id}` | Merge-patch update, may re-parent |
//! | DELETE | `/api/subcategories/{id}` | Soft-delete subcategory |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgSubcategoryRepository;
pub use services::SubcategoryService;
