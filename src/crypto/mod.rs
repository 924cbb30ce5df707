pub mod keccak;
pub mod sha1;
