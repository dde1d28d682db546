mod enums;
mod frame;
mod point;
mod target;

pub use enums::*;
pub use frame::*;
pub use point::*;
pub use target::*;
