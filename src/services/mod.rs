pub mod plug;

pub use plug::PlugService;
