pub mod api;

#[cfg(feature = "server")]
pub mod auth;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod openapi;

#[cfg(feature = "server")]
pub mod rest;

#[cfg(feature = "server")]
pub mod telemetry;

// Mock data layer
#[cfg(feature = "server")]
pub mod repo;

#[cfg(feature = "server")]
pub mod seed;

#[cfg(feature = "server")]
pub mod state;

#[cfg(feature = "server")]
pub mod store;
