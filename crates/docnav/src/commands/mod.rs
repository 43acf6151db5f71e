//! CLI command implementations.

mod build;
mod pages;
mod validate;

pub(crate) use build::BuildArgs;
pub(crate) use pages::PagesArgs;
pub(crate) use validate::ValidateArgs;
