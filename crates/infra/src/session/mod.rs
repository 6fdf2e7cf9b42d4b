//! Session storage and cookie signing

pub mod cookie;
pub mod store;

pub use cookie::SessionCookieCodec;
pub use store::InMemorySessionStore;
