pub(crate) mod grain;
pub(crate) mod paper;
