//! Mediator: components talk through one dispatcher instead of holding
//! references to each other.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::rc::Rc;

use serde_json::Value;
use uuid::Uuid;

use super::observer::{Logger, OnboardingNotification, RepositoryObserver, User, ALL_EVENTS};
use crate::error::Result;
use crate::output;

// ============================================================================
// Example: Mediator Pattern - Event Dispatcher
// ============================================================================

pub trait Listener {
    fn update(
        &mut self,
        event: &str,
        data: &Value,
        events: &EventDispatcher,
    ) -> Result<Vec<String>>;
}

pub type SharedListener = Rc<RefCell<dyn Listener>>;

/// Routes events to listeners by name; the `*` group hears everything.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: RefCell<HashMap<String, Vec<SharedListener>>>,
}

impl EventDispatcher {
    pub fn attach(&self, listener: SharedListener, event: &str) {
        self.listeners
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push(listener);
    }

    pub fn detach(&self, listener: &SharedListener, event: &str) {
        if let Some(group) = self.listeners.borrow_mut().get_mut(event) {
            group.retain(|l| !Rc::ptr_eq(l, listener));
        }
    }

    fn listeners_for(&self, event: &str) -> Vec<SharedListener> {
        let listeners = self.listeners.borrow();
        let mut found: Vec<SharedListener> = listeners.get(event).cloned().unwrap_or_default();
        if event != ALL_EVENTS {
            found.extend(listeners.get(ALL_EVENTS).into_iter().flatten().cloned());
        }
        found
    }

    /// Delivers `event` to its group, then to the wildcard group.
    ///
    /// A listener that is busy emitting this very event is skipped; it never
    /// hears its own broadcast.
    pub fn trigger(&self, event: &str, data: &Value) -> Result<Vec<String>> {
        let mut lines = vec![format!("EventDispatcher: Broadcasting the '{event}' event.")];
        for listener in self.listeners_for(event) {
            match listener.try_borrow_mut() {
                Ok(mut listener) => lines.extend(listener.update(event, data, self)?),
                Err(_) => tracing::debug!(event, "skipping listener that emitted the event"),
            }
        }
        Ok(lines)
    }
}

// ============================================================================
// Example: User Accounts Talking Through the Dispatcher
// ============================================================================

#[derive(Default)]
pub struct UserRepository {
    users: BTreeMap<String, User>,
}

impl UserRepository {
    pub fn initialize(&mut self, filename: &str, events: &EventDispatcher) -> Result<Vec<String>> {
        let mut lines = vec!["UserRepository: Loading user records from a file.".to_string()];
        lines.extend(events.trigger("users:init", &Value::from(filename))?);
        Ok(lines)
    }

    pub fn create_user(
        &mut self,
        data: &[(&str, &str)],
        events: &EventDispatcher,
    ) -> Result<(User, Vec<String>)> {
        let mut lines = vec!["UserRepository: Creating a user.".to_string()];
        let mut user = User::default();
        user.update(data);

        let id = Uuid::new_v4().simple().to_string();
        user.update(&[("id", id.as_str())]);
        self.users.insert(id, user.clone());

        lines.extend(events.trigger("users:created", &user.to_json()?)?);
        Ok((user, lines))
    }

    /// With `silent` set no event goes out; used when reacting to one.
    pub fn delete_user(
        &mut self,
        id: &str,
        silent: bool,
        events: &EventDispatcher,
    ) -> Result<Vec<String>> {
        let mut lines = vec!["UserRepository: Deleting a user.".to_string()];
        let Some(user) = self.users.remove(id) else {
            return Ok(lines);
        };
        if !silent {
            lines.extend(events.trigger("users:deleted", &user.to_json()?)?);
        }
        Ok(lines)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }
}

impl Listener for UserRepository {
    fn update(
        &mut self,
        event: &str,
        data: &Value,
        events: &EventDispatcher,
    ) -> Result<Vec<String>> {
        match (event, data.get("id").and_then(Value::as_str)) {
            ("users:deleted", Some(id)) => self.delete_user(id, true, events),
            _ => Ok(Vec::new()),
        }
    }
}

impl Listener for Logger {
    fn update(
        &mut self,
        event: &str,
        data: &Value,
        _events: &EventDispatcher,
    ) -> Result<Vec<String>> {
        Ok(vec![RepositoryObserver::update(self, event, data)?])
    }
}

impl Listener for OnboardingNotification {
    fn update(
        &mut self,
        event: &str,
        data: &Value,
        _events: &EventDispatcher,
    ) -> Result<Vec<String>> {
        Ok(vec![RepositoryObserver::update(self, event, data)?])
    }
}

/// A user removing itself: it only needs the dispatcher, not the repository.
pub fn delete_self(user: &User, events: &EventDispatcher) -> Result<Vec<String>> {
    let mut lines =
        vec!["User: I can now delete myself without worrying about the repository.".to_string()];
    lines.extend(events.trigger("users:deleted", &user.to_json()?)?);
    Ok(lines)
}

pub fn user_accounts_example(log_path: &Path) -> Result<Vec<String>> {
    let events = EventDispatcher::default();

    let repository = Rc::new(RefCell::new(UserRepository::default()));
    events.attach(repository.clone(), "users:deleted");
    events.attach(repository.clone(), "facebook:update");
    events.attach(Rc::new(RefCell::new(Logger::new(log_path)?)), ALL_EVENTS);
    events.attach(
        Rc::new(RefCell::new(OnboardingNotification::new("1@example.com"))),
        "users:created",
    );

    let mut lines = repository.borrow_mut().initialize("users.csv", &events)?;
    let (user, created) = repository
        .borrow_mut()
        .create_user(&[("name", "John Smith"), ("email", "john99@example.com")], &events)?;
    lines.extend(created);
    lines.extend(delete_self(&user, &events)?);
    Ok(lines)
}

pub fn run(event_log: &Path) {
    output::title("Pattern: Mediator");

    output::section("User Accounts");
    match user_accounts_example(event_log) {
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
    struct Counter {
        seen: Vec<String>,
    }

    impl Listener for Counter {
        fn update(
            &mut self,
            event: &str,
            _data: &Value,
            _events: &EventDispatcher,
        ) -> Result<Vec<String>> {
            self.seen.push(event.to_string());
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_wildcard_hears_everything() {
        let events = EventDispatcher::default();
        let all = Rc::new(RefCell::new(Counter::default()));
        let only_a = Rc::new(RefCell::new(Counter::default()));
        events.attach(all.clone(), ALL_EVENTS);
        events.attach(only_a.clone(), "a");

        events.trigger("a", &Value::Null).unwrap();
        events.trigger("b", &Value::Null).unwrap();

        assert_eq!(all.borrow().seen, vec!["a", "b"]);
        assert_eq!(only_a.borrow().seen, vec!["a"]);
    }

    #[test]
    fn test_detach() {
        let events = EventDispatcher::default();
        let counter = Rc::new(RefCell::new(Counter::default()));
        let shared: SharedListener = counter.clone();
        events.attach(Rc::clone(&shared), "a");
        events.detach(&shared, "a");

        events.trigger("a", &Value::Null).unwrap();
        assert!(counter.borrow().seen.is_empty());
    }

    #[test]
    fn test_self_deleting_user_leaves_repository() {
        let events = EventDispatcher::default();
        let repository = Rc::new(RefCell::new(UserRepository::default()));
        events.attach(repository.clone(), "users:deleted");

        let (user, _) = repository
            .borrow_mut()
            .create_user(&[("name", "Jo")], &events)
            .unwrap();
        let id = user.id().unwrap().to_string();
        assert!(repository.borrow().contains(&id));

        let lines = delete_self(&user, &events).unwrap();
        assert!(!repository.borrow().contains(&id));
        // repository handled it silently: no second broadcast
        assert_eq!(
            lines,
            vec![
                "User: I can now delete myself without worrying about the repository.",
                "EventDispatcher: Broadcasting the 'users:deleted' event.",
                "UserRepository: Deleting a user.",
            ]
        );
    }

    #[test]
    fn test_emitter_does_not_hear_itself() {
        let events = EventDispatcher::default();
        let repository = Rc::new(RefCell::new(UserRepository::default()));
        events.attach(repository.clone(), "users:deleted");

        let (user, _) = repository.borrow_mut().create_user(&[], &events).unwrap();
        let lines = repository
            .borrow_mut()
            .delete_user(user.id().unwrap(), false, &events)
            .unwrap();
        assert_eq!(lines.len(), 2);
    }
}
