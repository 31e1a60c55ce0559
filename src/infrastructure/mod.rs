//! Infrastructure layer - Storage backends, repositories and services

pub mod logging;
pub mod player;
pub mod storage;
pub mod team;
