pub mod cargo;
pub mod empresa;
pub mod evaluacion;
pub mod ges;

pub use cargo::Cargo;
pub use empresa::Empresa;
pub use evaluacion::{Evaluacion, MatrizFila};
pub use ges::Ges;
