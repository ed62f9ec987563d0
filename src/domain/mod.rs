// Domain layer: core models and ports (interfaces). No platform or D-Bus
// dependencies beyond std/serde.

pub mod model;
pub mod ports;
