//! Protocol module for chat-completion request/response structures
//!
//! This module defines the wire-shape data models exchanged with the
//! completion backend. These structures are:
//! - Immutable value data, constructed fresh per call
//! - Type-safe and serializable
//! - Deliberately minimal: one request envelope, one response envelope

pub mod types;

pub use types::{ChatModel, ChatRequest, ChatResponse, Choice, Message, MessageRole};
