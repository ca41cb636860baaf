use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use thiserror::Error;

use storefront_core::{ContactMessageId, DomainError, ValidationErrors};

use crate::message::{ContactMessage, NewContactMessage};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("contact store error: {0}")]
    Store(#[from] DomainError),
}

/// Append-only storage for contact messages.
pub trait ContactMessageStore: Send + Sync {
    fn insert(&self, message: ContactMessage) -> Result<(), DomainError>;

    /// All messages, oldest first.
    fn list(&self) -> Vec<ContactMessage>;
}

impl<S> ContactMessageStore for Arc<S>
where
    S: ContactMessageStore + ?Sized,
{
    fn insert(&self, message: ContactMessage) -> Result<(), DomainError> {
        (**self).insert(message)
    }

    fn list(&self) -> Vec<ContactMessage> {
        (**self).list()
    }
}

/// In-memory message store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryContactMessageStore {
    inner: RwLock<Vec<ContactMessage>>,
}

impl InMemoryContactMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactMessageStore for InMemoryContactMessageStore {
    fn insert(&self, message: ContactMessage) -> Result<(), DomainError> {
        let mut messages = self
            .inner
            .write()
            .map_err(|_| DomainError::invariant("contact store lock poisoned"))?;

        if messages.iter().any(|m| m.id == message.id) {
            return Err(DomainError::conflict(format!(
                "contact message already stored: {}",
                message.id
            )));
        }
        messages.push(message);
        Ok(())
    }

    fn list(&self) -> Vec<ContactMessage> {
        match self.inner.read() {
            Ok(messages) => messages.clone(),
            Err(_) => vec![],
        }
    }
}

/// Validate and store a contact message.
pub fn submit<S>(
    store: &S,
    input: NewContactMessage,
    now: DateTime<Utc>,
) -> Result<ContactMessage, ContactError>
where
    S: ContactMessageStore + ?Sized,
{
    input.validate()?;

    let message = ContactMessage::from_input(ContactMessageId::new(), input, now);
    store.insert(message.clone())?;

    tracing::info!(message_id = %message.id, "contact message received");
    Ok(message)
}
