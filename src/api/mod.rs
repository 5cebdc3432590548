//! Client for the hosted persistence service.
//!
//! The application prefers the remote relational store when one is
//! configured and degrades to the local SQLite store for the session when
//! the remote probe fails at startup.

pub mod remote;

pub use remote::RemoteConfig;
