// Match explanation: validation, percentage formatting, severity bands and
// report rendering for precomputed match results.
// Rendering is pure; handlers call it inline without spawn_blocking.

pub mod handlers;
pub mod models;
pub mod percent;
pub mod renderer;
pub mod report;
pub mod severity;
pub mod text;
pub mod validation;

#[cfg(test)]
pub mod fixtures;
