//! Version checking layer
//!
//! This module compares the version a manifest requires with the latest
//! stable release and describes what, if anything, needs attention.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Batch    │────▶│   Advisor   │────▶│   Support   │
//! │ (manifest)  │     │ (decision)  │     │  (semver)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │    Range    │
//!                                         │ (npm ranges)│
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`advisor`]: Advisory generation for a single dependency
//! - [`batch`]: Advisories for a whole dependency map
//! - [`support`]: Semver collaborator trait and the npm implementation
//! - [`range`]: npm range expression parsing and matching
//! - [`semver`]: Exact version parsing and version components
//! - [`error`]: Error types for version and range parsing

pub mod advisor;
pub mod batch;
pub mod error;
pub mod range;
pub mod semver;
pub mod support;
