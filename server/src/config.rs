use std::net::SocketAddr;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "Todo list HTTP API")]
pub struct ServerConfig {
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Default for the `hide_completed_items` setting.
    #[arg(long, env = "TODO_HIDE_COMPLETED", default_value_t = false)]
    pub hide_completed: bool,

    /// Fallback log filter when `RUST_LOG` is unset.
    #[arg(long, env = "TODO_LOG", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
