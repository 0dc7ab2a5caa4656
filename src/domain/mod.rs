// Domain layer: the pet record model and the ports save/load and config go through.

pub mod model;
pub mod ports;
