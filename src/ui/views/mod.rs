pub mod check;
pub mod cleanup;
pub mod deploy;
pub mod status;
pub mod teardown;
