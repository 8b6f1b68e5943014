//! icsfix feed patcher - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use short
//! `icsfix_test::` paths.

pub use icsfix_app as app;
pub use icsfix_core as core;
pub use icsfix_rfc as rfc;
pub use icsfix_service as service;
