pub mod llm;
pub mod prompt;
pub mod steam;
pub mod store;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
