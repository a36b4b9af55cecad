//! Template copying for create-vite-ssg
//!
//! - `operation`: the per-entry operations a copy is made of
//! - `copier`: walks the template tree and carries operations out

pub mod copier;
pub mod operation;

pub use copier::{copy_template, ensure_outside_template, CopySummary, TemplateCopier};
pub use operation::CopyOperation;
