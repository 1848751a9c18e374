//! Command-line and environment configuration.

use anyhow::Result;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Parser, Debug, Clone)]
#[command(name = "catalog-service", about = "Supplier and product catalog HTTP service", version)]
pub struct CliArgs {
    #[arg(
        long,
        env = "PORT",
        value_name = "PORT",
        help = "TCP port to listen on",
        default_value_t = DEFAULT_PORT
    )]
    pub port: u16,

    #[arg(
        long,
        env = "CATALOG_HOST",
        value_name = "ADDR",
        help = "Interface address to bind",
        default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    )]
    pub host: IpAddr,

    #[arg(
        long,
        env = "CATALOG_CHANNEL_CAPACITY",
        value_name = "N",
        help = "Mailbox size of each collection actor",
        default_value_t = DEFAULT_CHANNEL_CAPACITY
    )]
    pub channel_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub channel_capacity: usize,
}

impl ServerConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        anyhow::ensure!(
            args.channel_capacity > 0,
            "channel capacity must be at least 1"
        );

        Ok(Self {
            bind_address: SocketAddr::new(args.host, args.port),
            channel_capacity: args.channel_capacity,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}
