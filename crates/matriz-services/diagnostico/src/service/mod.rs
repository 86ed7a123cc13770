pub mod matriz_service;

pub use matriz_service::MatrizService;
