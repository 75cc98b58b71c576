
mod errors;
mod logging;
mod mst;
mod network;
