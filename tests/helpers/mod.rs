#![allow(unused_imports)]
#![allow(dead_code)]
pub mod test_app;
pub mod test_store;

pub use test_app::*;
pub use test_store::*;
