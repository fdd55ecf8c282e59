//! Year source adapters.

mod fixed;
mod reader;

pub use fixed::FixedYearSource;
pub use reader::ReaderYearSource;
