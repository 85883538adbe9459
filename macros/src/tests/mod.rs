//! Unit tests for the procedural macro helpers
