mod firebird;
mod native_library;
mod properties;
mod traits;


pub use firebird::*;
pub use native_library::*;
pub use properties::*;
pub use traits::*;
