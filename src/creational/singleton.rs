//! Singleton: one lazily-created, process-wide instance per type.
//!
//! Every singleton here is a `static OnceLock`; mutable ones wrap their state
//! in a `Mutex` or `RwLock` so `global()` can hand out `&'static Self`. A
//! poisoned lock is recovered rather than skipped, so no write is lost.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError, RwLock};

use chrono::Local;
use serde_json::{json, Value};

use crate::output;

// ============================================================================
// Example: Singleton Pattern with OnceLock
// ============================================================================

#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    pub fn instance() -> &'static Singleton {
        static INSTANCE: OnceLock<Singleton> = OnceLock::new();
        INSTANCE.get_or_init(|| Singleton { _private: () })
    }

    pub fn some_business_logic(&self) -> &'static str {
        "Singleton: running business logic on the one instance."
    }
}

pub fn concept_example() -> Vec<String> {
    let s1 = Singleton::instance();
    let s2 = Singleton::instance();

    vec![
        if std::ptr::eq(s1, s2) {
            "Singleton works, both variables contain the same instance.".to_string()
        } else {
            "Singleton failed, variables contain different instances.".to_string()
        },
        s1.some_business_logic().to_string(),
    ]
}

// ============================================================================
// Example: Application Settings
// ============================================================================

pub struct AppSettings {
    settings: RwLock<HashMap<String, String>>,
}

impl AppSettings {
    pub fn global() -> &'static AppSettings {
        static SETTINGS: OnceLock<AppSettings> = OnceLock::new();
        SETTINGS.get_or_init(|| AppSettings {
            settings: RwLock::new(HashMap::from([
                ("appName".to_string(), "My Application".to_string()),
                ("version".to_string(), "1.0.0".to_string()),
            ])),
        })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.settings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }
}

pub fn app_settings_example() -> Vec<String> {
    let settings = AppSettings::global();
    let app_name = settings.get("appName").unwrap_or_default();

    // Written through one handle, read through another
    settings.set("version", "1.0.1");
    let version = AppSettings::global().get("version").unwrap_or_default();

    vec![
        format!("App Name: {app_name}"),
        format!("Updated Version: {version}"),
    ]
}

// ============================================================================
// Example: Cache Manager
// ============================================================================

pub struct CacheManager {
    cache: RwLock<HashMap<String, Value>>,
}

impl CacheManager {
    pub fn global() -> &'static CacheManager {
        static CACHE: OnceLock<CacheManager> = OnceLock::new();
        CACHE.get_or_init(|| CacheManager {
            cache: RwLock::new(HashMap::new()),
        })
    }

    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

pub fn cache_example() -> Vec<String> {
    let cache = CacheManager::global();
    cache.set(
        "user_1",
        json!({ "name": "John Doe", "email": "john@example.com" }),
    );

    match CacheManager::global().get("user_1") {
        Some(user) => vec![format!("Cached User: {user}")],
        None => vec!["Cached User: <missing>".to_string()],
    }
}

// ============================================================================
// Example: Database Connection
// ============================================================================

#[derive(Debug)]
pub struct DatabaseConnection {
    connection: String,
}

impl DatabaseConnection {
    pub fn global() -> &'static DatabaseConnection {
        static CONNECTION: OnceLock<DatabaseConnection> = OnceLock::new();
        CONNECTION.get_or_init(|| DatabaseConnection {
            connection: "Database Connection Established".to_string(),
        })
    }

    pub fn connection(&self) -> &str {
        &self.connection
    }
}

pub fn database_connection_example() -> Vec<String> {
    let db1 = DatabaseConnection::global();
    let mut lines = vec![db1.connection().to_string()];

    let db2 = DatabaseConnection::global();
    if std::ptr::eq(db1, db2) {
        lines.push("Only one instance of DatabaseConnection exists.".to_string());
    }
    lines
}

// ============================================================================
// Example: Global Logger and Config
// ============================================================================

/// Prefixes every message with today's date and keeps what it wrote.
pub struct Logger {
    entries: Mutex<Vec<String>>,
}

impl Logger {
    pub fn global() -> &'static Logger {
        static LOGGER: OnceLock<Logger> = OnceLock::new();
        LOGGER.get_or_init(|| Logger {
            entries: Mutex::new(Vec::new()),
        })
    }

    pub fn write_log(&self, message: &str) -> String {
        let line = format!("{}: {}", Local::now().format("%Y-%m-%d"), message);
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.clone());
        line
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

pub fn log(message: &str) -> String {
    Logger::global().write_log(message)
}

pub struct Config {
    values: RwLock<HashMap<String, String>>,
}

impl Config {
    pub fn global() -> &'static Config {
        static CONFIG: OnceLock<Config> = OnceLock::new();
        CONFIG.get_or_init(|| Config {
            values: RwLock::new(HashMap::new()),
        })
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn set_value(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }
}

pub fn global_logging_example() -> Vec<String> {
    let mut lines = vec![log("Started!")];

    let l1 = Logger::global();
    let l2 = Logger::global();
    lines.push(if std::ptr::eq(l1, l2) {
        log("Logger has a single instance.")
    } else {
        log("Loggers are different.")
    });

    let login = "test_login";
    let password = "test_password";
    let config1 = Config::global();
    config1.set_value("login", login);
    config1.set_value("password", password);

    let config2 = Config::global();
    if config2.value("login").as_deref() == Some(login)
        && config2.value("password").as_deref() == Some(password)
    {
        lines.push(log("Config singleton also works fine."));
    }

    lines.push(log("Finished!"));
    lines
}

pub fn run() {
    output::title("Pattern: Singleton");

    output::section("Singleton (Concept)");
    output::lines(concept_example());
    println!();

    output::section("Application Settings");
    output::lines(app_settings_example());
    println!();

    output::section("Cache Manager");
    output::lines(cache_example());
    println!();

    output::section("Database Connection");
    output::lines(database_connection_example());
    println!();

    output::section("Global Logging and Config");
    output::lines(global_logging_example());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_instance() {
        assert!(std::ptr::eq(Singleton::instance(), Singleton::instance()));
        assert_eq!(
            concept_example()[0],
            "Singleton works, both variables contain the same instance."
        );
    }

    #[test]
    fn test_app_settings_shared_between_handles() {
        AppSettings::global().set("theme", "dark");
        assert_eq!(AppSettings::global().get("theme").as_deref(), Some("dark"));
        assert_eq!(
            AppSettings::global().get("appName").as_deref(),
            Some("My Application")
        );
    }

    #[test]
    fn test_cache_roundtrip() {
        CacheManager::global().set("test_key", json!({ "n": 1 }));
        assert_eq!(CacheManager::global().get("test_key"), Some(json!({ "n": 1 })));
        assert_eq!(CacheManager::global().get("never_set"), None);
    }

    #[test]
    fn test_database_connection() {
        assert_eq!(
            database_connection_example(),
            vec![
                "Database Connection Established",
                "Only one instance of DatabaseConnection exists.",
            ]
        );
    }

    #[test]
    fn test_logger_prefixes_date() {
        let line = log("hello");
        let today = Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(line, format!("{today}: hello"));
        assert!(Logger::global().entries().contains(&line));
    }

    #[test]
    fn test_logger_keeps_writing_after_a_panic() {
        let logger = Logger {
            entries: Mutex::new(Vec::new()),
        };
        let poisoned = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = logger.entries.lock().unwrap();
                    panic!("writer died holding the lock");
                })
                .join()
        });
        assert!(poisoned.is_err());
        assert!(logger.entries.is_poisoned());

        let line = logger.write_log("still here");
        assert_eq!(logger.entries(), vec![line]);
    }

    #[test]
    fn test_settings_survive_a_poisoned_lock() {
        let settings = AppSettings {
            settings: RwLock::new(HashMap::new()),
        };
        let _ = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = settings.settings.write().unwrap();
                    panic!("writer died holding the lock");
                })
                .join()
        });

        settings.set("theme", "light");
        assert_eq!(settings.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_global_logging_sequence() {
        let lines = global_logging_example();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].ends_with("Config singleton also works fine."));
    }
}
