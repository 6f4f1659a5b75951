// Adapters layer: real implementations of the domain ports.

pub mod sleeper;
