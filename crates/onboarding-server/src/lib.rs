// Onboarding Server Library
//
// Exposes configuration, logging, and lifecycle wiring so integration
// tests can run the real server in-process.

pub mod config;
pub mod lifecycle;
pub mod logging;
pub mod middleware;
pub mod routes;
