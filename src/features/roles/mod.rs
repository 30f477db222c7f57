//! Role management.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/roles` | Create role |
//! | GET | `/api/roles` | List active roles |
//! | GET | `/api/roles/{id}` | Get active role |
//! | PATCH | `/api/roles/{id}` | Rename role |
//! | DELETE | `/api/roles/{id}` | Soft-delete role |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgRoleRepository;
pub use services::RoleService;
