//! Endpoint methods of [`TwitterClient`](crate::TwitterClient), grouped by
//! resource family.
//!
//! Every method follows the same steps: check authorization when the
//! endpoint needs user context, build the parameter list (unset options are
//! left out), make one call, and hand the response to the factory.

mod account;
mod blocks;
mod direct_messages;
mod friendships;
mod geo;
mod help;
mod lists;
mod search;
mod statuses;
mod timelines;
mod trends;
mod users;
