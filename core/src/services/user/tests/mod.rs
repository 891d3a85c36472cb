//! Tests for the user service

mod validator_tests;
