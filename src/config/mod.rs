pub mod app_config;
pub mod codes;
pub mod group;
pub mod method;
pub mod target;

/// A liveness configuration document: group name to group configuration.
pub type Config = std::collections::HashMap<String, group::GroupConfig>;
