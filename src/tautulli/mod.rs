mod activity;
mod client;

pub use activity::parse_activity;
pub use client::Client;
