//! Behavioral tests for the form, guard and navigation
//!
//! This module provides BDD-style tests using given-when-then naming convention.
//! Tests focus on component behavior rather than implementation details.
