pub(crate) mod burst;
