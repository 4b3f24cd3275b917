//! Catalogue domain: projects, filter state and the cross-filter engine.
//!
//! Everything under this module is free of I/O. Projects enter through
//! [`services::ProjectValidator`], which is the only place allowed to build
//! them; the engine and the dropdown cycle only read them.
pub mod domain;
pub mod policies;
pub mod services;
