pub mod boot_device;
pub mod error;
pub mod power_action;
pub mod settings;
pub mod vapp;
