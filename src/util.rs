use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

const PORT: &str = "PORT";

const DEFAULT_PORT: u16 = 3001;

pub fn get_port() -> u16 {
    let port_from_env = std::env::var(PORT);
    port_from_env.map_or(DEFAULT_PORT, |res| res.parse().unwrap_or(DEFAULT_PORT))
}

const BIND_ADDR: &str = "BIND_ADDR";

const DEFAULT_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0));

pub fn get_addr() -> IpAddr {
    let addr_from_env = std::env::var(BIND_ADDR);
    addr_from_env.map_or(DEFAULT_ADDR, |res| res.parse().unwrap_or(DEFAULT_ADDR))
}

const DB_PATH: &str = "DB_PATH";

const DEFAULT_DB_PATH: &str = "./data/db.json";

pub fn get_db_path() -> PathBuf {
    std::env::var(DB_PATH).map_or_else(|_| PathBuf::from(DEFAULT_DB_PATH), PathBuf::from)
}
