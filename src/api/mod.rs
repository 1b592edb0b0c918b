//! Remote banner API: metadata wire shape and its client.

/// `GET /v1/meta/{code}` wire types and client.
pub mod meta;
