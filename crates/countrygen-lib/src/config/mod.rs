pub mod generator;

pub use generator::GeneratorConfig;
