//! Common test utilities for hilo.
//!
//! This module provides shared utilities for testing the hilo server.

// Re-export all common test utilities
pub mod http_client;
pub mod test_data;
