// Notation codec: "3 + 2i - 1j" <-> HypercomplexNumber

pub mod detector;
pub mod formatter;
pub mod parser;


pub use detector::is_real_notation;
pub use formatter::{count_decimals, format, precision_of};
pub use parser::{parse, parse_and_build, ParsedNotation};
