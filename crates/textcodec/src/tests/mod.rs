
mod snapshot_decode;
mod utils;
