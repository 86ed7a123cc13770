//! Derived risk products and the four-tier acceptability classification.

use crate::error::Result;
use crate::niveles::{NivelConsecuencia, NivelDeficiencia, NivelExposicion};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Acceptability tier derived from the Nivel de Riesgo.
///
/// Boundaries are fixed by the GTC-45 tables and evaluated high-to-low with
/// inclusive lower bounds, so a boundary value resolves to the stricter
/// (higher-risk) tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Interpretacion {
    Aceptable,
    Mejorable,
    NoAceptableConControl,
    NoAceptable,
}

impl Interpretacion {
    /// Classify a Nivel de Riesgo into its acceptability tier.
    pub const fn clasificar(nr: u32) -> Interpretacion {
        if nr >= 600 {
            Interpretacion::NoAceptable
        } else if nr >= 150 {
            Interpretacion::NoAceptableConControl
        } else if nr >= 40 {
            Interpretacion::Mejorable
        } else {
            Interpretacion::Aceptable
        }
    }

    /// Human-readable label for reports.
    pub const fn etiqueta(self) -> &'static str {
        match self {
            Interpretacion::Aceptable => "Aceptable",
            Interpretacion::Mejorable => "Mejorable",
            Interpretacion::NoAceptableConControl => "No Aceptable con Control Específico",
            Interpretacion::NoAceptable => "No Aceptable",
        }
    }
}

impl fmt::Display for Interpretacion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nombre = match self {
            Interpretacion::Aceptable => "Aceptable",
            Interpretacion::Mejorable => "Mejorable",
            Interpretacion::NoAceptableConControl => "NoAceptableConControl",
            Interpretacion::NoAceptable => "NoAceptable",
        };
        write!(f, "{nombre}")
    }
}

impl FromStr for Interpretacion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Aceptable" => Ok(Interpretacion::Aceptable),
            "Mejorable" => Ok(Interpretacion::Mejorable),
            "NoAceptableConControl" => Ok(Interpretacion::NoAceptableConControl),
            "NoAceptable" => Ok(Interpretacion::NoAceptable),
            other => Err(format!("unknown interpretacion: {other}")),
        }
    }
}

/// The full result of scoring one hazard assignment.
///
/// `np` and `nr` are always recomputed from the three ordinal inputs; they
/// carry no independent state and are never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluacionRiesgo {
    pub nd: NivelDeficiencia,
    pub ne: NivelExposicion,
    pub nc: NivelConsecuencia,
    pub np: u32,
    pub nr: u32,
    pub interpretacion: Interpretacion,
}

/// Score a hazard assignment from its three ordinal levels.
///
/// Pure and infallible: the type system guarantees the inputs are in the
/// published sets, so the products and tier follow deterministically.
pub fn evaluar(
    nd: NivelDeficiencia,
    ne: NivelExposicion,
    nc: NivelConsecuencia,
) -> EvaluacionRiesgo {
    let np = nd.valor() as u32 * ne.valor() as u32;
    let nr = np * nc.valor() as u32;

    EvaluacionRiesgo {
        nd,
        ne,
        nc,
        np,
        nr,
        interpretacion: Interpretacion::clasificar(nr),
    }
}

/// Score a hazard assignment from raw numeric levels.
///
/// Rejects values outside the enumerated sets; nothing is clamped.
pub fn evaluar_crudo(nd: u8, ne: u8, nc: u8) -> Result<EvaluacionRiesgo> {
    let nd = NivelDeficiencia::try_from(nd)?;
    let ne = NivelExposicion::try_from(ne)?;
    let nc = NivelConsecuencia::try_from(nc)?;
    Ok(evaluar(nd, ne, nc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_products_exact_for_all_valid_triples() {
        for nd in NivelDeficiencia::TODOS {
            for ne in NivelExposicion::TODOS {
                for nc in NivelConsecuencia::TODOS {
                    let eval = evaluar(nd, ne, nc);
                    assert_eq!(eval.np, nd.valor() as u32 * ne.valor() as u32);
                    assert_eq!(eval.nr, eval.np * nc.valor() as u32);
                    assert_eq!(eval.interpretacion, Interpretacion::clasificar(eval.nr));
                }
            }
        }
    }

    #[test]
    fn test_worst_case_is_no_aceptable() {
        let eval = evaluar(
            NivelDeficiencia::MuyAlto,
            NivelExposicion::Continua,
            NivelConsecuencia::Mortal,
        );
        assert_eq!(eval.nr, 4000);
        assert_eq!(eval.interpretacion, Interpretacion::NoAceptable);
    }

    #[test]
    fn test_mid_case_is_no_aceptable_con_control() {
        let eval = evaluar(
            NivelDeficiencia::Alto,
            NivelExposicion::Frecuente,
            NivelConsecuencia::Grave,
        );
        assert_eq!(eval.np, 18);
        assert_eq!(eval.nr, 450);
        assert_eq!(eval.interpretacion, Interpretacion::NoAceptableConControl);
    }

    #[test]
    fn test_boundary_40_is_mejorable_not_aceptable() {
        let eval = evaluar(
            NivelDeficiencia::Medio,
            NivelExposicion::Ocasional,
            NivelConsecuencia::Leve,
        );
        assert_eq!(eval.nr, 40);
        assert_eq!(eval.interpretacion, Interpretacion::Mejorable);
    }

    #[test]
    fn test_zero_deficiency_is_aceptable() {
        let eval = evaluar(
            NivelDeficiencia::Bajo,
            NivelExposicion::Esporadica,
            NivelConsecuencia::Leve,
        );
        assert_eq!(eval.nr, 0);
        assert_eq!(eval.interpretacion, Interpretacion::Aceptable);
    }

    #[test]
    fn test_tier_boundaries_inclusive_lower_bound() {
        assert_eq!(Interpretacion::clasificar(600), Interpretacion::NoAceptable);
        assert_eq!(
            Interpretacion::clasificar(599),
            Interpretacion::NoAceptableConControl
        );
        assert_eq!(
            Interpretacion::clasificar(150),
            Interpretacion::NoAceptableConControl
        );
        assert_eq!(Interpretacion::clasificar(149), Interpretacion::Mejorable);
        assert_eq!(Interpretacion::clasificar(40), Interpretacion::Mejorable);
        assert_eq!(Interpretacion::clasificar(39), Interpretacion::Aceptable);
        assert_eq!(Interpretacion::clasificar(0), Interpretacion::Aceptable);
        assert_eq!(Interpretacion::clasificar(4000), Interpretacion::NoAceptable);
    }

    #[test]
    fn test_evaluar_is_pure() {
        let a = evaluar(
            NivelDeficiencia::Medio,
            NivelExposicion::Frecuente,
            NivelConsecuencia::Grave,
        );
        let b = evaluar(
            NivelDeficiencia::Medio,
            NivelExposicion::Frecuente,
            NivelConsecuencia::Grave,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_evaluar_crudo_valid() {
        let eval = evaluar_crudo(6, 3, 25).unwrap();
        assert_eq!(eval.nr, 450);
        assert_eq!(eval.interpretacion, Interpretacion::NoAceptableConControl);
    }

    #[test]
    fn test_evaluar_crudo_rejects_out_of_set_nd() {
        let err = evaluar_crudo(5, 1, 10).unwrap_err();
        assert_eq!(
            err,
            Error::NivelInvalido {
                campo: "nd",
                valor: 5,
                permitidos: "0, 2, 6, 10",
            }
        );
    }

    #[test]
    fn test_evaluar_crudo_rejects_out_of_set_ne_and_nc() {
        assert!(evaluar_crudo(2, 7, 10).is_err());
        assert!(evaluar_crudo(2, 2, 11).is_err());
    }

    #[test]
    fn test_interpretacion_display_and_from_str() {
        for tier in [
            Interpretacion::Aceptable,
            Interpretacion::Mejorable,
            Interpretacion::NoAceptableConControl,
            Interpretacion::NoAceptable,
        ] {
            let parsed: Interpretacion = tier.to_string().parse().unwrap();
            assert_eq!(parsed, tier);
        }
        assert!("Regular".parse::<Interpretacion>().is_err());
    }

    #[test]
    fn test_serde_tier_names() {
        let json = serde_json::to_string(&Interpretacion::NoAceptableConControl).unwrap();
        assert_eq!(json, "\"NoAceptableConControl\"");
    }

    #[test]
    fn test_etiqueta() {
        assert_eq!(
            Interpretacion::NoAceptableConControl.etiqueta(),
            "No Aceptable con Control Específico"
        );
        assert_eq!(Interpretacion::Aceptable.etiqueta(), "Aceptable");
    }
}
