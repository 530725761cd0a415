pub mod error;
pub mod allocation;
pub mod protocol;
pub mod weather_parser;
pub mod api_client;
pub mod session;
pub mod reporter;

#[cfg(test)]
pub mod test_support;
