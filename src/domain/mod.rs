// Domain layer: core models and ports (interfaces). No filesystem or EXIF
// dependencies beyond the rational type mirroring exif::Rational.

pub mod model;
pub mod ports;
