pub mod tap;
pub mod touch;

pub use tap::*;
pub use touch::*;
