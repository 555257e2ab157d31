//! SoleRevive site library.
//!
//! This crate provides the site functionality as a library, allowing the
//! CLI to reuse the repositories (seeding) and tests to exercise the
//! handlers and data layer.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON API only; page rendering lives in
//!   a separate front end
//! - `PostgreSQL` for the shop schema (products, orders, restoration
//!   requests, contact submissions)
//! - One binary serving both the public marketplace API and the admin
//!   back-office API under `/api/admin`

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
