// Operation dispatch and the parse -> operate -> format pipeline

pub mod dispatch;
pub mod evaluate;

#[cfg(test)]
mod tests;

pub use dispatch::*;
pub use evaluate::*;
