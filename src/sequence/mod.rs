pub mod analysis;
pub mod conversion;
pub mod prepare;
pub mod translation;

pub use analysis::*;
pub use conversion::*;
pub use prepare::*;
pub use translation::*;
