pub mod algebra;
pub mod display;
pub mod notation;
pub mod operation;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use algebra::{AlgebraError, HypercomplexNumber};
pub use notation::{format, parse_and_build, precision_of};
pub use operation::{evaluate, operate, Operation};
