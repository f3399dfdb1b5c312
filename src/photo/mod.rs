//! Photo-domain helpers consumed by configuration resolution

pub mod ai;
