pub mod directory;
pub mod time;

pub use directory::Directory;
pub use time::{Clock, FixedClock, SystemClock};
