pub mod traits;
pub mod email;

pub use traits::DigestSink;
pub use email::EmailSink;
