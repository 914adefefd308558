//! Integration tests for Labelboard.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.

mod label_workflow_tests;
mod printing_tests;
