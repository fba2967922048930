//! Resource clients, one per Freshdesk entity.
//!
//! Each client wraps a cloned [`Gateway`](crate::gateway::Gateway) and maps
//! its operations onto fixed verbs and paths. They are independent, so
//! ticket-only operations do not widen the contact or company surface.

mod companies;
mod contacts;
mod tickets;

pub use companies::Companies;
pub use contacts::Contacts;
pub use tickets::Tickets;
