//! GPA and CGPA calculator for the Anna University grading scheme.
//!
//! [`grading`] holds the pure calculation engine; the other modules load
//! input and configuration and print results.

pub mod config;
pub mod grading;
pub mod input;
pub mod output;
pub mod theme;
