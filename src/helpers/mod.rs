pub(crate) mod distinct;
pub(crate) mod grouping;
pub(crate) mod materialize;
pub(crate) mod reduce;

pub use grouping::Grouping;
