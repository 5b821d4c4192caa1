use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use auth::HashingStrategy;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

/// Credential key carrying the claimed user name.
pub const CRED_USER: &str = "user";

/// Credential key carrying the plaintext password (submitted) or its digest (stored).
pub const CRED_PASSWORD: &str = "password";

/// Free-form provider configuration handed to a provider by the dispatcher.
pub type ProviderConfig = HashMap<String, Value>;

/// Stable identifier of an authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Reference to the parent session a provider session is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session ID.
    ///
    /// # Returns
    /// SessionId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Provider resolved from the registry: its id and configured hashing policy.
#[derive(Clone)]
pub struct ProviderDescriptor {
    pub id: ProviderId,
    pub hashing: Arc<dyn HashingStrategy>,
}

impl ProviderDescriptor {
    pub fn new(id: ProviderId, hashing: Arc<dyn HashingStrategy>) -> Self {
        Self { id, hashing }
    }
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("id", &self.id)
            .field("hashing", &self.hashing.algorithm())
            .finish()
    }
}

/// Credentials submitted by a client for a single verification call.
///
/// The password is plaintext and is never printed by `Debug`.
#[derive(Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ClientCredentials {
    values: HashMap<String, Value>,
}

impl ClientCredentials {
    pub fn new(values: HashMap<String, Value>) -> Self {
        Self { values }
    }

    /// Build credentials holding a user name and password.
    ///
    /// # Arguments
    /// * `user` - Claimed user name
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// ClientCredentials with the `user` and `password` keys set
    pub fn with_user_password(user: impl Into<String>, password: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(CRED_USER.to_string(), Value::String(user.into()));
        values.insert(CRED_PASSWORD.to_string(), Value::String(password.into()));
        Self { values }
    }

    /// Claimed user name, if present.
    pub fn user(&self) -> Option<String> {
        self.values.get(CRED_USER).and_then(value_to_string)
    }

    /// Submitted plaintext password, if present.
    pub fn password(&self) -> Option<String> {
        self.values.get(CRED_PASSWORD).and_then(value_to_string)
    }
}

impl From<HashMap<String, Value>> for ClientCredentials {
    fn from(values: HashMap<String, Value>) -> Self {
        Self::new(values)
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.values {
            if key == CRED_PASSWORD {
                map.entry(key, &"<redacted>");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}

/// Stored credential attributes of one user under one provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialRecord {
    attributes: HashMap<String, Value>,
}

impl CredentialRecord {
    pub fn new(attributes: HashMap<String, Value>) -> Self {
        Self { attributes }
    }

    /// Record holding only a password digest.
    pub fn with_password_hash(password_hash: impl Into<String>) -> Self {
        Self::default().with_attribute(CRED_PASSWORD, Value::String(password_hash.into()))
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Stored password digest.
    ///
    /// An empty value means no password is set and yields `None`.
    pub fn password_hash(&self) -> Option<String> {
        self.attributes
            .get(CRED_PASSWORD)
            .and_then(value_to_string)
            .filter(|hash| !hash.is_empty())
    }
}

/// Identity that passed verification. Only the verifier constructs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    username: String,
    provider_id: ProviderId,
}

impl VerifiedIdentity {
    pub(crate) fn new(username: String, provider_id: ProviderId) -> Self {
        Self {
            username,
            provider_id,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }
}

/// Scalar rendering of a credential value; `null` counts as absent.
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
