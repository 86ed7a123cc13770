pub mod cargos;
pub mod empresas;
pub mod evaluaciones;
pub mod export;
pub mod ges;
pub mod health;

pub use cargos::{create_cargo, delete_cargo, get_cargo, list_cargos, update_cargo};
pub use empresas::{
    create_empresa, delete_empresa, get_empresa, list_empresas, update_empresa,
};
pub use evaluaciones::{
    delete_evaluacion, evaluar, list_evaluaciones, registrar_evaluacion,
};
pub use export::{export_matriz, get_matriz};
pub use ges::{create_ges, delete_ges, list_ges, update_ges};
pub use health::health_check;
