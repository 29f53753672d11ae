//! The canned-reply guidance assistant.
//!
//! One free-text message plus the active catalog filter map to exactly one
//! reply string. The router is a pure function of its inputs and an
//! injected random source; it holds no conversation memory.

mod intent;
pub mod replies;
mod router;

pub use intent::{classify, Intent};
pub use router::{respond, typing_delay, MAX_SHOWN};
