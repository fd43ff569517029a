pub mod applicationdb;
pub mod chatdb;
pub mod client;
pub mod keys;
pub mod kv;
pub mod offerdb;
pub mod profiledb;
pub mod searchdb;
