#![cfg_attr(feature = "unstable", feature(test))]

mod data;
mod restrictions;
mod results;
mod session;

pub use data::*;
pub use restrictions::*;
pub use results::*;
pub use session::*;
