#[macro_use]
pub mod if_then;
pub mod logging;
pub use logging::{debug, error, info, trace, warn};
pub mod parser;
pub use parser::*;
