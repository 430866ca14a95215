//! Feature slices, each split into state / update / render.

pub mod form;
pub mod home;
pub mod status;
