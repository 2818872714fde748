//! Contact actions: form validation, clipboard, and external links.

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Same shape the contact form has always validated against: something before
/// the @, something after, and a dot-separated domain, none containing spaces.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Errors that can occur during contact actions.
#[derive(Debug)]
pub enum ContactError {
    /// Clipboard access failed.
    Clipboard(String),
    /// Launching the external handler failed.
    OpenLink(String),
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
            Self::OpenLink(msg) => write!(f, "Failed to open link: {}", msg),
        }
    }
}

impl std::error::Error for ContactError {}

/// Validates an email address for the contact form.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Service for contact-section side effects.
pub struct ContactService;

impl ContactService {
    pub fn new() -> Self {
        Self
    }

    /// Copies the contact email to the OS clipboard.
    pub fn copy_email(&self, email: &str) -> Result<(), ContactError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ContactError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(email.to_string())
            .map_err(|e| ContactError::Clipboard(e.to_string()))?;

        info!("Copied contact email to clipboard");
        Ok(())
    }

    /// Opens a URL in the system browser.
    pub fn open_link(&self, url: &str) -> Result<(), ContactError> {
        info!("Opening external link: {}", url);
        open::that(url).map_err(|e| ContactError::OpenLink(e.to_string()))
    }
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("rin@example.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.co.jp"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("rin"));
        assert!(!is_valid_email("rin@example"));
        assert!(!is_valid_email("rin example@domain.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("rin@"));
    }
}
