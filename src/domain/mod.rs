// Domain layer: value types and the speaker capability. No lesson logic here.

pub mod model;
pub mod ports;
