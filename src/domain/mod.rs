// Domain layer: models and ports. Terminal and filesystem access live in adapters/ and core/.

pub mod model;
pub mod ports;
