pub mod advisor;
pub mod suggestions;
