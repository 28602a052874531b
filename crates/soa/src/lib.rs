//! Containers that store composite elements field by field ("structure of arrays")
//! instead of element by element.

pub mod pair_vec;

pub use pair_vec::PairVec;
