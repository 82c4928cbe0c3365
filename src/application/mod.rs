// Application layer - Use cases and ports
pub mod boundary_cache;
pub mod boundary_repository;
pub mod dashboard_service;
pub mod display_host;

#[cfg(test)]
pub mod testing;
