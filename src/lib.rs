//! binder - Local-first encrypted life binder
//!
//! This library provides the core of the binder application: a single
//! user's sensitive personal records (contacts, accounts, documents,
//! estate and financial data), kept on the local device and readable only
//! with a user-chosen passphrase. There is no server and no recovery: a
//! forgotten passphrase makes the data permanently unreadable.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `crypto`: Key derivation, authenticated encryption, passphrase handling
//! - `models`: The Plan aggregate, its sections, and normalization
//! - `storage`: The single-record plan store
//! - `session`: The locked/unlocked state machine with auto-lock
//! - `backup`: Encrypted backup export and validated import
//!
//! # Example
//!
//! ```rust,ignore
//! use binder::config::BinderPaths;
//! use binder::session::SessionController;
//! use binder::storage::PlanStore;
//!
//! let paths = BinderPaths::new()?;
//! let mut session = SessionController::new(PlanStore::new(&paths)?);
//! session.create_new("My Binder", Some("correct horse battery staple"))?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;

pub use error::{BinderError, BinderResult};
