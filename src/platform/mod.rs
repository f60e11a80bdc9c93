// hostenv - platform/mod.rs
//
// Host environment queries: settings resolution, OS version, and the
// application manifest. Depends on util only.

pub mod manifest;
pub mod os_version;
pub mod settings;
