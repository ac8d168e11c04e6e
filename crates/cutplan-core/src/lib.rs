//! # cutplan Core
//!
//! Core types shared by every cutplan crate: the error taxonomy used by the
//! shape-to-toolpath compiler and the events that drive a design session.

pub mod error;
pub mod event;

pub use error::{CollaboratorError, Error, GeometryError, Result, SceneError};
pub use event::SessionEvent;
