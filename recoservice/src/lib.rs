pub mod api;
pub mod recommendations;
pub mod settings;

#[cfg(any(feature = "client", test))]
pub mod client;

#[cfg(any(feature = "server", test))]
pub mod app_config;
#[cfg(any(feature = "server", test))]
pub mod errors;
#[cfg(any(feature = "server", test))]
mod handlers;
