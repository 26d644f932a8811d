// Domain layer: core models and ports (interfaces). No knowledge of concrete
// providers or rendering targets.

pub mod model;
pub mod ports;
