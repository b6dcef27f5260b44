//! Opaque API credential.

/// An API key forwarded to the generation endpoint.
///
/// The value is never shown by `Debug` or `Display`. Blank values are not
/// credentials, so construction fails for them.
///
/// # Examples
///
/// ```
/// use backlog_core::ApiKey;
///
/// let key = ApiKey::new("AIza-secret").unwrap();
/// assert_eq!(key.expose(), "AIza-secret");
/// assert!(!format!("{:?}", key).contains("secret"));
/// assert!(ApiKey::new("   ").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a value, or `None` if it is empty or whitespace.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// The raw key, for handing to the transport.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("****")
    }
}
