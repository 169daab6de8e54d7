use reqwest::{Client, ClientBuilder};
use std::time::Duration;

pub fn create_client() -> reqwest::Result<Client> {
    ClientBuilder::new()
        .user_agent(concat!("discord-notify/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10))
        .build()
}
