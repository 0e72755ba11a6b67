pub mod codec;
pub mod encoding;
pub mod error;
pub mod source;

pub use codec::*;
pub use encoding::*;
pub use error::*;
pub use source::*;
