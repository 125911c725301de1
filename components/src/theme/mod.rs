mod error;
mod provider;
mod tokens;

pub use self::{error::*, provider::*, tokens::*};
