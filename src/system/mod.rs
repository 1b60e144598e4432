pub mod kill;
pub mod platform;
pub mod sampler;
