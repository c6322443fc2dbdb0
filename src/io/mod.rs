//! File I/O support for netplan configuration

pub mod yaml;
