// Domain layer: countdown model and the capability ports it is driven through.

pub mod model;
pub mod ports;
