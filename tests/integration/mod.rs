//! Integration tests for whole-form validation
//!
//! These tests validate complete candidate records against the embedded
//! example schemas, the way a form layer would on submit.

pub mod profile_form;
pub mod properties;
pub mod signup_form;
