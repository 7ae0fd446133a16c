pub mod normalization;
pub mod params;
pub mod request;
pub mod trumpfstaerke;

pub use self::{normalization::*, params::*, request::*, trumpfstaerke::*};
