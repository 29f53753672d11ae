//! # Disha Core Library
//!
//! Core business logic for Disha, a student guidance assistant over a
//! static catalog of courses, colleges and careers. All operations are
//! available through this library; the CLI binary is a thin front-end over
//! the same core.
//!
//! ## Architecture
//!
//! - **Catalog**: read-only course/college dataset with filter and token
//!   search operations
//! - **Assistant**: keyword-routed canned-reply generation -- a pure
//!   function of one message, the active filter and an injected random
//!   source
//! - **Conversation**: append-only message log owned by the app context
//! - **Storage**: JSON session persistence and TOML configuration
//!
//! ## Key Components
//!
//! - [`App`]: top-level context owning all mutable state
//! - [`Catalog`]: catalog store and query operations
//! - [`assistant::respond`]: the message router
//! - [`SessionStore`]: validated login persistence

pub mod app;
pub mod assistant;
pub mod catalog;
pub mod conversation;
pub mod error;
pub mod session;
pub mod storage;

pub use app::App;
pub use catalog::{Catalog, CareerProfile, CollegeRecord, CourseRecord, Field, Filter, Level};
pub use conversation::{ConversationLog, ConversationMessage, DeliveryStatus, Sender};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use session::UserProfile;
pub use storage::{Config, Session, SessionStore};
