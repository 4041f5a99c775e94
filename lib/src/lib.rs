pub mod card;
pub mod card_parsers;
pub mod client;
pub mod error;
pub mod intent;
pub mod messages;
pub mod normalize;
pub mod reading;
pub mod spread;

pub use client::{fetch_reading, ReadingClient};
pub use error::{ErrorKind, ReadingError, Result};
pub use intent::{Intent, ReadingRequest};
pub use reading::{Reading, ReadingState};
pub use spread::Spread;
