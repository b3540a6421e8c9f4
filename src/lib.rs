pub mod error;
pub mod folder;
pub mod json_export;
