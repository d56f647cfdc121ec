//! Model configuration: the config struct plus environment-driven
//! constructors with the service defaults.

pub mod default_config;
pub mod qa_model_config;
