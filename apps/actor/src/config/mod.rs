//! Client configuration: connection target and authentication secret.

mod connection;

pub use connection::{ClientConfig, CLIENT_SECRET_ENV, MAX_SECRET_LEN, RPC_URL_ENV};
