//! Tests for the tabular parser
