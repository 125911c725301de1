mod glyphs;
mod icon;
mod named;

pub use self::{glyphs::*, icon::*, named::*};
