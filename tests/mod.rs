//! Test suite for the counterparty picker
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
