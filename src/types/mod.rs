// PlantLens shared type definitions
// Each submodule defines types used across the application.

pub mod capture;
pub mod errors;
pub mod plant;
pub mod route;
