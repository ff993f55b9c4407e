// Adapters layer: concrete implementations of the domain ports — the REST
// backend client and the file-backed session store.

pub mod rest;
pub mod session_file;
