// Domain layer: vehicle model, record mapping, plate normalization and ports.
// No HTTP in here.

pub mod mapping;
pub mod model;
pub mod plate;
pub mod ports;
