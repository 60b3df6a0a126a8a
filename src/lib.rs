pub mod cli;
pub mod config;
pub mod delivery;
pub mod domain;
pub mod errors;
pub mod services;
pub mod sources;
pub mod summarizer;

#[cfg(test)]
pub(crate) mod test_support;
