//! Core library for leetpush
//!
//! This crate implements the **Functional Core** of the leetpush application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The leetpush project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`leetpush_core`** (this crate): Pure transformation functions with zero I/O
//! - **`leetpush`**: I/O operations and orchestration (the Imperative Shell)
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`daily`]: Domain models for the daily question and the webhook payload
//! - [`format`]: HTML to chat-markdown conversion
//!
//! Each module contains domain models, transformation functions, and unit
//! tests using fixture data (no mocking).
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use leetpush_core::format::html_to_markdown;
//!
//! let body = html_to_markdown("<p>Given an array...</p><pre>nums = [1, 2]</pre>");
//! assert!(body.contains("> nums = [1, 2]"));
//! ```

pub mod daily;
pub mod format;
