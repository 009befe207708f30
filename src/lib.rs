//! Graduate school application tracking backend
//!
//! Layers follow a ports-and-adapters split:
//! - `domain`: entities, value objects, ports and services
//! - `application`: one use case per operation
//! - `adapters`: the actix-web JSON API
//! - `infrastructure`: configuration, Postgres repositories, hashing and tokens

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod test_support;
