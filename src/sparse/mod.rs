mod coo;
mod csr;

pub use coo::CooEntry;
pub use csr::{CsrMatrix, Weight};
