//! Compile-time build information, shown by `awaken-sim --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
