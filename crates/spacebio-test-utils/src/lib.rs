//! Fixtures and in-process stub servers shared by the workspace's tests.

pub mod fixtures;
pub mod stub;
