#![allow(dead_code)]

pub mod factories;
pub mod fake_source;
pub mod http_stub;
