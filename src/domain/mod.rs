//! Typed wrappers over decoded account and alert records.
//!
//! A [`Customer`] fetches a whole collection through one client call and
//! wraps each record with a reference back to the client, so follow-up calls
//! (balances, portfolio, alert details) need no extra plumbing. Lookups by id
//! always re-fetch and scan; nothing is cached between calls.

pub mod account;
pub mod alert;
pub mod customer;

pub use account::Account;
pub use alert::Alert;
pub use customer::Customer;
