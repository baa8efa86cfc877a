// Domain layer: the book model and the output port. No I/O lives here.

pub mod model;
pub mod ports;
