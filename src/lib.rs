pub mod config;
pub mod fetch;
pub mod hash;
pub mod locate;
pub mod monitor;
pub mod notify;
pub mod state;

mod error;

#[cfg(test)]
mod test_server;

pub use config::{Args, MonitorConfig, Target};
pub use error::MonitorError;
pub use fetch::{Fetcher, HttpFetcher, RequestProfile};
pub use monitor::{Monitor, Outcome};
pub use notify::{Notifier, WebhookNotifier};
pub use state::HashStore;
