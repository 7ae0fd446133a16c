pub mod card;
pub mod eplayerindex;
pub mod rawcard;

pub use self::{card::*, eplayerindex::*, rawcard::*};
