// Domain layer: package model and the threshold port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
