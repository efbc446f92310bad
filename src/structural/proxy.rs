//! Proxy: a stand-in with the same interface that controls access to the
//! real object.

use chrono::{DateTime, Local};

use crate::output;

// ============================================================================
// Example: Proxy Pattern - Access Control and Logging
// ============================================================================

pub trait Subject {
    fn request(&mut self) -> Vec<String>;
}

pub struct RealSubject;

impl Subject for RealSubject {
    fn request(&mut self) -> Vec<String> {
        vec!["RealSubject: Handling request.".to_string()]
    }
}

pub struct Proxy<S: Subject> {
    real_subject: S,
    access_log: Vec<DateTime<Local>>,
}

impl<S: Subject> Proxy<S> {
    pub fn new(real_subject: S) -> Self {
        Self {
            real_subject,
            access_log: Vec::new(),
        }
    }

    pub fn access_log(&self) -> &[DateTime<Local>] {
        &self.access_log
    }

    fn check_access(&self) -> bool {
        true
    }
}

impl<S: Subject> Subject for Proxy<S> {
    fn request(&mut self) -> Vec<String> {
        let mut lines = vec!["Proxy: Checking access prior to firing a real request.".to_string()];
        if !self.check_access() {
            return lines;
        }

        lines.extend(self.real_subject.request());
        self.access_log.push(Local::now());
        tracing::debug!(requests = self.access_log.len(), "proxy forwarded request");
        lines.push("Proxy: Logging the time of request.".to_string());
        lines
    }
}

pub fn concept_example() -> Vec<String> {
    let mut lines = vec!["Client: Executing the client code with a real subject:".to_string()];
    lines.extend(RealSubject.request());
    lines.push(String::new());
    lines.push("Client: Executing the same client code with a proxy:".to_string());
    lines.extend(Proxy::new(RealSubject).request());
    lines
}

// ============================================================================
// Example: Lazy Image Loading
// ============================================================================

pub trait Image {
    fn display(&mut self) -> Vec<String>;
}

pub struct RealImage {
    filename: String,
}

impl RealImage {
    /// Loading happens on construction; that is the expensive part.
    pub fn load(filename: &str) -> (Self, String) {
        (
            Self {
                filename: filename.to_string(),
            },
            format!("Loading image: {filename}"),
        )
    }
}

impl Image for RealImage {
    fn display(&mut self) -> Vec<String> {
        vec![format!("Displaying image: {}", self.filename)]
    }
}

pub struct ProxyImage {
    filename: String,
    real: Option<RealImage>,
}

impl ProxyImage {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            real: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.is_some()
    }
}

impl Image for ProxyImage {
    fn display(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.real.is_none() {
            let (image, loaded) = RealImage::load(&self.filename);
            lines.push(loaded);
            self.real = Some(image);
        }
        if let Some(real) = self.real.as_mut() {
            lines.extend(real.display());
        }
        lines
    }
}

pub fn image_example() -> Vec<String> {
    let mut image = ProxyImage::new("photo.jpg");
    let mut lines = vec!["First display (loads from disk):".to_string()];
    lines.extend(image.display());
    lines.push(String::new());
    lines.push("Second display (already loaded):".to_string());
    lines.extend(image.display());
    lines
}

pub fn run() {
    output::title("Pattern: Proxy");

    output::section("Proxy (Concept)");
    output::lines(concept_example());
    println!();

    output::section("Lazy Image");
    output::lines(image_example());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_wraps_request() {
        let mut proxy = Proxy::new(RealSubject);
        assert_eq!(
            proxy.request(),
            vec![
                "Proxy: Checking access prior to firing a real request.",
                "RealSubject: Handling request.",
                "Proxy: Logging the time of request.",
            ]
        );
        proxy.request();
        assert_eq!(proxy.access_log().len(), 2);
    }

    #[test]
    fn test_image_loads_once() {
        let mut image = ProxyImage::new("photo.jpg");
        assert!(!image.is_loaded());

        assert_eq!(
            image.display(),
            vec!["Loading image: photo.jpg", "Displaying image: photo.jpg"]
        );
        assert!(image.is_loaded());
        assert_eq!(image.display(), vec!["Displaying image: photo.jpg"]);
    }
}
