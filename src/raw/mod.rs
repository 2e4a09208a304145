mod arena;
mod handle;
mod node;
mod raw_bimap;
mod treap;

pub(crate) use handle::Handle;
pub(crate) use raw_bimap::RawBimap;
