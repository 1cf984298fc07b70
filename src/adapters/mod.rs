//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session validators (JWT, mock)
//! - `http` - Axum routes, DTOs and middleware
//! - `memory` - In-memory storage for development and tests
//! - `postgres` - PostgreSQL persistence

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtConfig, JwtSessionValidator, MockSessionValidator};
pub use memory::{InMemoryAssessmentHistory, InMemoryMembershipReader};
pub use postgres::PostgresAssessmentHistoryRepository;
