//! Library side of the `nbmd` binary: the terminal host adapters.

pub mod host;
