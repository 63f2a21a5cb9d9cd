// PlantLens services
// Services are boundary components: camera capture and the external recognition client.

pub mod capture;
pub mod recognition;
