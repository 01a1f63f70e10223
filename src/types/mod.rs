pub mod interval;
pub mod report;
pub mod signal;

pub use interval::*;
pub use report::*;
pub use signal::*;
