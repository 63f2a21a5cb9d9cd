// PlantLens presentation layer
// Pure render functions from data to text; screens emit no state of their own.

pub mod screens;
