//! Data models for the Freshdesk v2 API.
//!
//! Each entity comes in three shapes: the full read representation, a
//! create payload, and a partial update payload. Payload fields are all
//! optional and absent fields are left out of the JSON body, so the server
//! applies its own defaults and partial updates touch only what is set.

mod common;
mod company;
mod contact;
mod ticket;

pub use company::*;
pub use contact::*;
pub use ticket::*;
