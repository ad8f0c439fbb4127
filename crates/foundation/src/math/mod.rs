pub mod angles;
pub mod precision;
pub mod projection;

pub use angles::*;
pub use precision::*;
pub use projection::*;
