//! Observer: subjects notify subscribed observers when their state changes.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::Result;
use crate::output;

// ============================================================================
// Example: Observer Pattern - Weather Station
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeatherData {
    pub temperature: f64,
    pub humidity: f64,
}

pub trait WeatherObserver {
    fn update(&mut self, data: &WeatherData) -> String;
}

#[derive(Default)]
pub struct CurrentConditionsDisplay {
    last: Option<WeatherData>,
}

impl CurrentConditionsDisplay {
    pub fn last(&self) -> Option<WeatherData> {
        self.last
    }
}

impl WeatherObserver for CurrentConditionsDisplay {
    fn update(&mut self, data: &WeatherData) -> String {
        self.last = Some(*data);
        format!(
            "Current Conditions: Temperature: {}°C, Humidity: {}%",
            data.temperature, data.humidity
        )
    }
}

#[derive(Default)]
pub struct ForecastDisplay;

impl WeatherObserver for ForecastDisplay {
    fn update(&mut self, data: &WeatherData) -> String {
        format!(
            "Forecast: The temperature is expected to be {}°C tomorrow.",
            data.temperature + 1.0
        )
    }
}

pub type SharedWeatherObserver = Rc<RefCell<dyn WeatherObserver>>;

#[derive(Default)]
pub struct WeatherStation {
    data: WeatherData,
    observers: Vec<SharedWeatherObserver>,
}

impl WeatherStation {
    pub fn attach(&mut self, observer: SharedWeatherObserver) {
        self.observers.push(observer);
    }

    pub fn detach(&mut self, observer: &SharedWeatherObserver) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set_weather_data(&mut self, temperature: f64, humidity: f64) -> Vec<String> {
        self.data = WeatherData {
            temperature,
            humidity,
        };
        self.notify()
    }

    fn notify(&self) -> Vec<String> {
        self.observers
            .iter()
            .map(|observer| observer.borrow_mut().update(&self.data))
            .collect()
    }
}

pub fn weather_station_example() -> Vec<String> {
    let mut station = WeatherStation::default();
    let current: SharedWeatherObserver =
        Rc::new(RefCell::new(CurrentConditionsDisplay::default()));
    let forecast: SharedWeatherObserver = Rc::new(RefCell::new(ForecastDisplay));
    station.attach(Rc::clone(&current));
    station.attach(Rc::clone(&forecast));

    let mut lines = vec!["Setting new weather data:".to_string()];
    lines.extend(station.set_weather_data(25.5, 60.0));
    lines.push(String::new());
    lines.push("Setting new weather data:".to_string());
    lines.extend(station.set_weather_data(28.0, 55.0));

    station.detach(&forecast);
    lines.push(String::new());
    lines.push("Forecast display detached, setting new weather data:".to_string());
    lines.extend(station.set_weather_data(21.0, 70.0));
    lines
}

// ============================================================================
// Event Log File
// ============================================================================

/// Appends `<timestamp>: '<event>' with data '<json>'` lines to a file.
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    /// Starts a fresh log; an existing file at `path` is removed.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, event: &str, data: &Value) -> Result<()> {
        let entry = format!(
            "{}: '{}' with data '{}'\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            event,
            serde_json::to_string(data)?
        );
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry.as_bytes())?;
        Ok(())
    }
}

// ============================================================================
// Example: User Repository with Event Groups
// ============================================================================

/// Wildcard group: observers here hear every event.
pub const ALL_EVENTS: &str = "*";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct User {
    pub attributes: BTreeMap<String, String>,
}

impl User {
    pub fn update(&mut self, data: &[(&str, &str)]) {
        for (key, value) in data {
            self.attributes.insert(key.to_string(), value.to_string());
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id").map(String::as_str)
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

pub trait RepositoryObserver {
    fn update(&mut self, event: &str, data: &Value) -> Result<String>;
}

pub type SharedRepositoryObserver = Rc<RefCell<dyn RepositoryObserver>>;

pub struct Logger {
    log: EventLog,
}

impl Logger {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            log: EventLog::create(path)?,
        })
    }
}

impl RepositoryObserver for Logger {
    fn update(&mut self, event: &str, data: &Value) -> Result<String> {
        self.log.append(event, data)?;
        Ok(format!("Logger: I've written '{event}' entry to the log."))
    }
}

pub struct OnboardingNotification {
    admin_email: String,
}

impl OnboardingNotification {
    pub fn new(admin_email: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
        }
    }
}

impl RepositoryObserver for OnboardingNotification {
    fn update(&mut self, _event: &str, _data: &Value) -> Result<String> {
        Ok(format!(
            "OnboardingNotification: The notification has been emailed to {}!",
            self.admin_email
        ))
    }
}

#[derive(Default)]
pub struct UserRepository {
    users: BTreeMap<String, User>,
    observers: HashMap<String, Vec<SharedRepositoryObserver>>,
}

impl UserRepository {
    pub fn attach(&mut self, observer: SharedRepositoryObserver, event: &str) {
        self.observers
            .entry(event.to_string())
            .or_default()
            .push(observer);
    }

    pub fn detach(&mut self, observer: &SharedRepositoryObserver, event: &str) {
        if let Some(group) = self.observers.get_mut(event) {
            group.retain(|o| !Rc::ptr_eq(o, observer));
        }
    }

    /// The event's own group first, then the wildcard group.
    fn observers_for(&self, event: &str) -> Vec<SharedRepositoryObserver> {
        let mut groups = vec![event];
        if event != ALL_EVENTS {
            groups.push(ALL_EVENTS);
        }
        groups
            .into_iter()
            .filter_map(|name| self.observers.get(name))
            .flatten()
            .cloned()
            .collect()
    }

    pub fn notify(&self, event: &str, data: &Value, out: &mut Vec<String>) -> Result<()> {
        out.push(format!("UserRepository: Broadcasting the '{event}' event."));
        for observer in self.observers_for(event) {
            out.push(observer.borrow_mut().update(event, data)?);
        }
        Ok(())
    }

    pub fn initialize(&mut self, filename: &str, out: &mut Vec<String>) -> Result<()> {
        out.push("UserRepository: Loading user records from a file.".to_string());
        self.notify("users:init", &Value::from(filename), out)
    }

    pub fn create_user(&mut self, data: &[(&str, &str)], out: &mut Vec<String>) -> Result<User> {
        out.push("UserRepository: Creating a user.".to_string());
        let mut user = User::default();
        user.update(data);

        let id = Uuid::new_v4().simple().to_string();
        user.update(&[("id", id.as_str())]);
        self.users.insert(id, user.clone());

        self.notify("users:created", &user.to_json()?, out)?;
        Ok(user)
    }

    /// `None` when the user is not (or no longer) stored here.
    pub fn update_user(
        &mut self,
        user: &User,
        data: &[(&str, &str)],
        out: &mut Vec<String>,
    ) -> Result<Option<User>> {
        out.push("UserRepository: Updating a user.".to_string());
        let Some(stored) = user.id().and_then(|id| self.users.get_mut(id)) else {
            return Ok(None);
        };
        stored.update(data);
        let updated = stored.clone();

        self.notify("users:updated", &updated.to_json()?, out)?;
        Ok(Some(updated))
    }

    pub fn delete_user(&mut self, user: &User, out: &mut Vec<String>) -> Result<()> {
        out.push("UserRepository: Deleting a user.".to_string());
        let Some(removed) = user.id().and_then(|id| self.users.remove(id)) else {
            return Ok(());
        };
        self.notify("users:deleted", &removed.to_json()?, out)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

pub fn user_repository_example(log_path: &Path) -> Result<Vec<String>> {
    let mut repository = UserRepository::default();
    repository.attach(Rc::new(RefCell::new(Logger::new(log_path)?)), ALL_EVENTS);
    repository.attach(
        Rc::new(RefCell::new(OnboardingNotification::new("admin@example.com"))),
        "users:created",
    );

    let mut out = Vec::new();
    repository.initialize("users.csv", &mut out)?;
    let user = repository.create_user(
        &[("name", "John Doe"), ("email", "johndoe@example.com")],
        &mut out,
    )?;
    repository.delete_user(&user, &mut out)?;
    Ok(out)
}

pub fn run(event_log: &Path) {
    output::title("Pattern: Observer");

    output::section("Weather Station");
    output::lines(weather_station_example());
    println!();

    output::section("User Repository");
    match user_repository_example(event_log) {
        Ok(lines) => {
            output::lines(lines);
            println!("(entries written to {})", event_log.display());
        }
        Err(e) => output::error(e),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl RepositoryObserver for Recorder {
        fn update(&mut self, event: &str, _data: &Value) -> Result<String> {
            self.events.push(event.to_string());
            Ok(format!("Recorder: {event}"))
        }
    }

    #[test]
    fn test_weather_displays() {
        let lines = weather_station_example();
        assert_eq!(lines[1], "Current Conditions: Temperature: 25.5°C, Humidity: 60%");
        assert_eq!(
            lines[2],
            "Forecast: The temperature is expected to be 26.5°C tomorrow."
        );
        assert_eq!(
            lines[6],
            "Forecast: The temperature is expected to be 29°C tomorrow."
        );
        // after detaching, only the current conditions display reports
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_detach_stops_updates() {
        let display = Rc::new(RefCell::new(CurrentConditionsDisplay::default()));
        let shared: SharedWeatherObserver = display.clone();
        let mut station = WeatherStation::default();
        station.attach(Rc::clone(&shared));

        station.set_weather_data(10.0, 40.0);
        station.detach(&shared);
        assert_eq!(station.observer_count(), 0);
        assert!(station.set_weather_data(30.0, 20.0).is_empty());
        assert_eq!(display.borrow().last().map(|d| d.temperature), Some(10.0));
    }

    #[test]
    fn test_event_groups_and_wildcard() {
        let all = Rc::new(RefCell::new(Recorder::default()));
        let created = Rc::new(RefCell::new(Recorder::default()));

        let mut repository = UserRepository::default();
        repository.attach(all.clone(), ALL_EVENTS);
        repository.attach(created.clone(), "users:created");

        let mut out = Vec::new();
        let user = repository.create_user(&[("name", "Ann")], &mut out).unwrap();
        repository
            .update_user(&user, &[("name", "Anna")], &mut out)
            .unwrap();
        repository.delete_user(&user, &mut out).unwrap();

        assert_eq!(created.borrow().events, vec!["users:created"]);
        assert_eq!(
            all.borrow().events,
            vec!["users:created", "users:updated", "users:deleted"]
        );
        assert_eq!(repository.user_count(), 0);
    }

    #[test]
    fn test_unknown_user_is_ignored() {
        let mut repository = UserRepository::default();
        let mut out = Vec::new();
        let stranger = User::default();

        assert_eq!(
            repository.update_user(&stranger, &[], &mut out).unwrap(),
            None
        );
        repository.delete_user(&stranger, &mut out).unwrap();
        assert_eq!(
            out,
            vec!["UserRepository: Updating a user.", "UserRepository: Deleting a user."]
        );
    }

    #[test]
    fn test_created_user_gets_hex_id() {
        let mut repository = UserRepository::default();
        let user = repository.create_user(&[], &mut Vec::new()).unwrap();
        let id = user.id().unwrap();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
