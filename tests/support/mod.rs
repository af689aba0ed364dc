#![allow(dead_code)]

pub mod http;
pub mod stats;
pub mod stubs;
