//! # GTC-45 Risk Scoring
//!
//! Deterministic occupational-risk scoring per the Colombian GTC-45 method.
//!
//! Each hazard exposure (GES) assigned to a job position is scored with three
//! ordinal levels: Nivel de Deficiencia (ND, effectiveness of existing
//! controls), Nivel de Exposición (NE, frequency/duration of exposure) and
//! Nivel de Consecuencia (NC, severity of potential harm). The derived
//! products are:
//!
//! - `NP = ND × NE` (Nivel de Probabilidad)
//! - `NR = NP × NC` (Nivel de Riesgo)
//!
//! NR is bucketed into a four-tier acceptability classification with fixed,
//! inclusive lower bounds: NR ≥ 600 → No Aceptable; 150 ≤ NR < 600 →
//! No Aceptable con Control; 40 ≤ NR < 150 → Mejorable; NR < 40 → Aceptable.
//!
//! ## Example
//!
//! ```rust
//! use matriz_gtc45::{evaluar, Interpretacion, NivelConsecuencia, NivelDeficiencia, NivelExposicion};
//!
//! let eval = evaluar(
//!     NivelDeficiencia::Alto,
//!     NivelExposicion::Frecuente,
//!     NivelConsecuencia::Grave,
//! );
//! assert_eq!(eval.np, 18);
//! assert_eq!(eval.nr, 450);
//! assert_eq!(eval.interpretacion, Interpretacion::NoAceptableConControl);
//! ```
//!
//! The crate is pure: no I/O, no state, no clamping. Raw numeric inputs
//! outside the enumerated sets are rejected, never coerced.

pub mod error;
pub mod evaluacion;
pub mod niveles;

// Re-export commonly used types
pub use error::{Error, Result};
pub use evaluacion::{evaluar, evaluar_crudo, EvaluacionRiesgo, Interpretacion};
pub use niveles::{NivelConsecuencia, NivelDeficiencia, NivelExposicion};
