// Domain layer: rates, recipes and the seams the formulas depend on.

pub mod model;
pub mod ports;
