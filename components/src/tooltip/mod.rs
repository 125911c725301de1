mod id;
mod placement;
mod positioner;
mod state;
mod tooltip;
mod transition;

pub use self::{id::*, placement::*, positioner::*, state::*, tooltip::*, transition::*};
