//! TheArtOfFun: a grab bag of classic numeric, bit-twiddling and
//! text routines behind one command-line dispatcher.
//!
//! Each module holds a family of small, pure routines; `app` wires
//! them to the option table and `bench` times them all.

pub mod app;
pub mod bench;
pub mod bits;
pub mod cipher;
pub mod compress;
pub mod convert;
pub mod date;
pub mod error;
pub mod hash;
pub mod power;
pub mod prng;
pub mod sort;
pub mod text;
