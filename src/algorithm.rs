mod beam;
mod frontier;
mod repair;

pub(crate) use beam::beam_search;
pub use frontier::EvictionPolicy;
pub(crate) use repair::repair_search;
