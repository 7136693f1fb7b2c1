//! Session state and command execution for the Witcher tracker.
//!
//! A [`Session`] owns Geralt's inventory, bestiary, and alchemy
//! knowledge, and turns parsed commands into state changes and reply
//! lines. The interactive front end feeds it one line at a time.

/// The session: state plus line-by-line command execution.
pub mod session;

pub use session::{Reply, Session};
