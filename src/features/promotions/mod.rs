//! Promotion management.
//!
//! A promotion discounts an order either by a percentage (at most 100) or by a fixed
//! amount, within a `valid_from..=valid_until` window.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/promotions` | Create promotion |
//! | GET | `/api/promotions` | List active promotions |
//! | GET | `/api/promotions/{id}` | Get active promotion |
//! | PATCH | `/api/promotions/{id}` | Merge-patch update |
//! | DELETE | `/api/promotions/{id}` | Soft-delete promotion |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgPromotionRepository;
pub use services::PromotionService;
