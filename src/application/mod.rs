/// Application layer - Use cases, DTOs and read models
///
/// This layer wires read-through views to the providers handed out by a
/// record source and assembles their results into a board report.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
