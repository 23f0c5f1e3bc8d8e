//! Infrastructure layer - External service implementations

pub mod logging;
pub mod rio;
pub mod services;
