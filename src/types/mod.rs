//! Core enumerations shared across the netplan data model
//!
//! Each enum carries a private static name table mapping it to the
//! canonical string used in the generated YAML document.

mod backend;
mod def_type;
mod wifi_mode;

pub use backend::Backend;
pub use def_type::DefType;
pub use wifi_mode::WifiMode;
