//! Transport bindings for the hosted storage provider, split by domain.

pub(crate) mod interop;
pub(crate) mod objects;
