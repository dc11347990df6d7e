// Shell configuration, read from the environment.
//
// HOST and PORT override the bind address. The defaults suit local development.

use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        let host: IpAddr = host
            .parse()
            .with_context(|| format!("HOST is not a valid address: {host}"))?;
        let port: u16 = port
            .parse()
            .with_context(|| format!("PORT is not a valid port: {port}"))?;
        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
        })
    }
}
