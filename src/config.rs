use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path of the JSON document holding `menus`, `cart` and `orders`, or
    /// `:memory:` to keep it in process only.
    pub db_path: String,
    pub default_page_limit: u64,
    /// Number of menus generated when the document does not exist yet.
    pub seed_menu_count: usize,
    /// Use `status` on every envelope instead of `statusCode` on menus.
    pub unify_envelope: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            db_path: "db.json".to_string(),
            default_page_limit: 8,
            seed_menu_count: 12,
            unify_envelope: false,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unset variables keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let config = Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            db_path: lookup("DB_PATH").unwrap_or(defaults.db_path),
            default_page_limit: parse_var(&lookup, "DEFAULT_PAGE_LIMIT", defaults.default_page_limit)?,
            seed_menu_count: parse_var(&lookup, "SEED_MENU_COUNT", defaults.seed_menu_count)?,
            unify_envelope: parse_var(&lookup, "UNIFY_ENVELOPE", defaults.unify_envelope)?,
        };
        anyhow::ensure!(config.default_page_limit > 0, "DEFAULT_PAGE_LIMIT must be greater than 0");
        Ok(config)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid {}", name, std::any::type_name::<T>())),
        None => Ok(default),
    }
}
