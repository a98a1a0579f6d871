use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Duration;

/// a.root-servers.net
pub const DEFAULT_ROOT_SERVER: Ipv4Addr = Ipv4Addr::new(198, 41, 0, 4);

/// Settings for the iterative walk from the root down.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Nameserver every top-level resolution starts from.
    #[serde(default = "default_root_server")]
    pub root_server: Ipv4Addr,

    /// Destination port for every query.
    #[serde(default = "default_port")]
    pub port: u16,

    /// How many nested CNAME / NS-name sub-resolutions may be stacked.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Queries allowed within a single (sub-)resolution loop.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Queries allowed for one whole resolution, nested lookups included.
    #[serde(default = "default_max_queries")]
    pub max_queries: usize,

    /// Per-datagram deadline in seconds. Unset means wait forever.
    #[serde(default)]
    pub query_timeout_secs: Option<u64>,

    #[serde(default = "default_recv_buffer_size")]
    pub recv_buffer_size: usize,
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            port: default_port(),
            max_depth: default_max_depth(),
            max_iterations: default_max_iterations(),
            max_queries: default_max_queries(),
            query_timeout_secs: None,
            recv_buffer_size: default_recv_buffer_size(),
        }
    }
}

fn default_root_server() -> Ipv4Addr {
    DEFAULT_ROOT_SERVER
}

fn default_port() -> u16 {
    53
}

fn default_max_depth() -> usize {
    8
}

fn default_max_iterations() -> usize {
    32
}

fn default_max_queries() -> usize {
    64
}

fn default_recv_buffer_size() -> usize {
    1024
}
