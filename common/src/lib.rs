//! Headless core of the placement dashboard.
//!
//! Everything here is free of browser APIs so the screens' behavior can be
//! exercised natively: wire schemas and their normalized records (`model`,
//! `requests`), the fetch error taxonomy (`error`), display formatting
//! (`format`), navigation targets (`routes`) and the per-screen state
//! machines (`views`) that the Yew components in `frontend` drive.

pub mod effects;
pub mod error;
pub mod format;
pub mod model;
pub mod requests;
pub mod routes;
pub mod views;
