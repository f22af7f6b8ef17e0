pub mod analyze;
pub mod configure;
pub mod gateway;
pub mod serve;
