//! Request-scoped user context

use uuid::Uuid;

use crate::domain::accounts::email_addresses::EmailAddress;

/// The user a request is acting on behalf of.
///
/// Holds an optional cache of the user's email addresses. The cache lives only
/// as long as this value does, which is normally a single request, and is never
/// invalidated automatically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    /// User UUID
    pub id: Uuid,

    email_address_cache: Option<Vec<EmailAddress>>,
}

impl User {
    /// Creates a user context with an empty cache
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            email_address_cache: None,
        }
    }

    /// Returns the cached email addresses, if the cache has been filled
    pub fn cached_email_addresses(&self) -> Option<&[EmailAddress]> {
        self.email_address_cache.as_deref()
    }

    pub(crate) fn set_email_address_cache(&mut self, addresses: Vec<EmailAddress>) {
        self.email_address_cache = Some(addresses);
    }
}

/// Details of the request that triggered an operation.
///
/// Passed through untouched to the confirmation sender.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestContext {
    /// The base URL of the application, used to build links
    pub base_url: String,
}

impl RequestContext {
    /// Creates a new request context
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
