pub mod clob;

pub use clob::ClobRemote;
