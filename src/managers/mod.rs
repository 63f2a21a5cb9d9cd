// PlantLens state managers
// Managers handle stateful operations: the persisted plant history and the screen router.

pub mod history_store;
pub mod router;
