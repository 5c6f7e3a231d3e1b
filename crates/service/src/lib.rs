//! Gateway service layer: token verification, backend transport adapters,
//! and the request aggregators built on top of them.
//! - `auth` verifies bearer credentials and extracts identity claims.
//! - `clients` wraps the catalog gRPC contract and the two HTTP backends
//!   behind retrying adapters with a uniform error shape.
//! - `aggregate` composes the clients into the dashboard and health views.

pub mod aggregate;
pub mod auth;
pub mod clients;
