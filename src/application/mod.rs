/// Application layer - Use cases, session state and DTOs
///
/// This layer contains the application logic that orchestrates
/// catalogue services and coordinates with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod session;
pub mod use_cases;
