use std::env;

pub const DEFAULT_ADDR: &'static str = "localhost:3000";

/// Process settings, read once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub addr: String,
}

impl Config {
    /// `HERMES_ADDR` overrides the listen address. Log filtering is left to `RUST_LOG`.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Config
        where F: Fn(&str) -> Option<String>
    {
        let addr = lookup("HERMES_ADDR")
            .map(|addr| addr.trim().to_string())
            .filter(|addr| !addr.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        Config { addr: addr }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_localhost() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.addr, DEFAULT_ADDR);
    }

    #[test]
    fn addr_comes_from_environment() {
        let config = Config::from_lookup(|key| match key {
            "HERMES_ADDR" => Some(" 0.0.0.0:8080 ".to_string()),
            _ => None,
        });
        assert_eq!(config.addr, "0.0.0.0:8080");
    }

    #[test]
    fn blank_addr_falls_back() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.addr, DEFAULT_ADDR);
    }
}
