//! Non-visual machinery: the remote collection transport and the search
//! pipeline that debounces, tags and merges queries.

pub mod remote;
pub mod search;
