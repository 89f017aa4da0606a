/// Backend trait, paints and blend modes.
pub mod backend;
/// `vello_cpu` raster backend.
pub mod cpu;
/// Recording backend.
pub mod record;
