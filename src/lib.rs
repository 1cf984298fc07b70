//! Lucid - Mindset assessment backend
//!
//! Scores a ten-question assessment across ten mindset dimensions, classifies
//! the result into an archetype, and keeps each user's result history behind
//! a tier-gated HTTP API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
