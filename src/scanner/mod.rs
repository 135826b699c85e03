pub mod dependency;
pub mod dockerfile;
pub mod secrets;

pub use dependency::DependencyScanner;
pub use dockerfile::DockerScanner;
pub use secrets::SecretScanner;
