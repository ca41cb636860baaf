//! Contact form: validation and storage of customer messages.

pub mod message;
pub mod store;

pub use message::{ContactMessage, NewContactMessage};
pub use store::{ContactError, ContactMessageStore, InMemoryContactMessageStore, submit};
