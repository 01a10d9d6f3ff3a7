// Domain layer: profile model and ports. Adapters live under config/, core/ and dom/.

pub mod model;
pub mod ports;
