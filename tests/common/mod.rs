#![allow(dead_code)]

pub mod fake_translate;
pub mod harness;
pub mod http_client;
