use std::str::FromStr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite://inventory.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Process settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Settings {
    /// Reads `HOST`, `PORT`, `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        Settings {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(lookup("PORT"), defaults.port),
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_or(
                lookup("DATABASE_MAX_CONNECTIONS"),
                defaults.max_connections,
            ),
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .map(|value| value.parse::<T>().ok())
        .flatten()
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use std::collections::HashMap;

    #[test]
    fn defaults_test() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(Settings::default(), settings);
        assert_eq!(8080, settings.port);
        assert_eq!("sqlite://inventory.db", settings.database_url);
    }

    #[test]
    fn overrides_test() {
        let env = HashMap::from([
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
        ]);

        let settings = Settings::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!("127.0.0.1", settings.host);
        assert_eq!(9000, settings.port);
        assert_eq!("sqlite::memory:", settings.database_url);
        assert_eq!(2, settings.max_connections);
    }

    #[test]
    fn invalid_numbers_fall_back_test() {
        let settings = Settings::from_lookup(|key| match key {
            "PORT" => Some("not-a-port".to_owned()),
            "DATABASE_MAX_CONNECTIONS" => Some("-1".to_owned()),
            _ => None,
        });

        assert_eq!(8080, settings.port);
        assert_eq!(5, settings.max_connections);
    }
}
