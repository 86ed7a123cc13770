//! The three ordinal risk factors of the GTC-45 method.
//!
//! Each level carries a fixed numeric weight from the published tables.
//! Conversions from raw numbers reject out-of-set values instead of
//! clamping, so a caller can never smuggle in an unpublished weight.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nivel de Deficiencia — effectiveness of existing controls (lower is better).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NivelDeficiencia {
    Bajo,
    Medio,
    Alto,
    MuyAlto,
}

impl NivelDeficiencia {
    pub const TODOS: [NivelDeficiencia; 4] = [
        NivelDeficiencia::Bajo,
        NivelDeficiencia::Medio,
        NivelDeficiencia::Alto,
        NivelDeficiencia::MuyAlto,
    ];

    /// The published numeric weight of this level.
    pub const fn valor(self) -> u8 {
        match self {
            NivelDeficiencia::Bajo => 0,
            NivelDeficiencia::Medio => 2,
            NivelDeficiencia::Alto => 6,
            NivelDeficiencia::MuyAlto => 10,
        }
    }
}

impl TryFrom<u8> for NivelDeficiencia {
    type Error = Error;

    fn try_from(valor: u8) -> Result<Self> {
        match valor {
            0 => Ok(NivelDeficiencia::Bajo),
            2 => Ok(NivelDeficiencia::Medio),
            6 => Ok(NivelDeficiencia::Alto),
            10 => Ok(NivelDeficiencia::MuyAlto),
            _ => Err(Error::NivelInvalido {
                campo: "nd",
                valor,
                permitidos: "0, 2, 6, 10",
            }),
        }
    }
}

impl fmt::Display for NivelDeficiencia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let etiqueta = match self {
            NivelDeficiencia::Bajo => "Bajo",
            NivelDeficiencia::Medio => "Medio",
            NivelDeficiencia::Alto => "Alto",
            NivelDeficiencia::MuyAlto => "Muy Alto",
        };
        write!(f, "{etiqueta}")
    }
}

/// Nivel de Exposición — frequency/duration of exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NivelExposicion {
    Esporadica,
    Ocasional,
    Frecuente,
    Continua,
}

impl NivelExposicion {
    pub const TODOS: [NivelExposicion; 4] = [
        NivelExposicion::Esporadica,
        NivelExposicion::Ocasional,
        NivelExposicion::Frecuente,
        NivelExposicion::Continua,
    ];

    /// The published numeric weight of this level.
    pub const fn valor(self) -> u8 {
        match self {
            NivelExposicion::Esporadica => 1,
            NivelExposicion::Ocasional => 2,
            NivelExposicion::Frecuente => 3,
            NivelExposicion::Continua => 4,
        }
    }
}

impl TryFrom<u8> for NivelExposicion {
    type Error = Error;

    fn try_from(valor: u8) -> Result<Self> {
        match valor {
            1 => Ok(NivelExposicion::Esporadica),
            2 => Ok(NivelExposicion::Ocasional),
            3 => Ok(NivelExposicion::Frecuente),
            4 => Ok(NivelExposicion::Continua),
            _ => Err(Error::NivelInvalido {
                campo: "ne",
                valor,
                permitidos: "1, 2, 3, 4",
            }),
        }
    }
}

impl fmt::Display for NivelExposicion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let etiqueta = match self {
            NivelExposicion::Esporadica => "Esporádica",
            NivelExposicion::Ocasional => "Ocasional",
            NivelExposicion::Frecuente => "Frecuente",
            NivelExposicion::Continua => "Continua",
        };
        write!(f, "{etiqueta}")
    }
}

/// Nivel de Consecuencia — severity of potential harm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NivelConsecuencia {
    Leve,
    Grave,
    MuyGrave,
    Mortal,
}

impl NivelConsecuencia {
    pub const TODOS: [NivelConsecuencia; 4] = [
        NivelConsecuencia::Leve,
        NivelConsecuencia::Grave,
        NivelConsecuencia::MuyGrave,
        NivelConsecuencia::Mortal,
    ];

    /// The published numeric weight of this level.
    pub const fn valor(self) -> u8 {
        match self {
            NivelConsecuencia::Leve => 10,
            NivelConsecuencia::Grave => 25,
            NivelConsecuencia::MuyGrave => 60,
            NivelConsecuencia::Mortal => 100,
        }
    }
}

impl TryFrom<u8> for NivelConsecuencia {
    type Error = Error;

    fn try_from(valor: u8) -> Result<Self> {
        match valor {
            10 => Ok(NivelConsecuencia::Leve),
            25 => Ok(NivelConsecuencia::Grave),
            60 => Ok(NivelConsecuencia::MuyGrave),
            100 => Ok(NivelConsecuencia::Mortal),
            _ => Err(Error::NivelInvalido {
                campo: "nc",
                valor,
                permitidos: "10, 25, 60, 100",
            }),
        }
    }
}

impl fmt::Display for NivelConsecuencia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let etiqueta = match self {
            NivelConsecuencia::Leve => "Leve",
            NivelConsecuencia::Grave => "Grave",
            NivelConsecuencia::MuyGrave => "Muy Grave",
            NivelConsecuencia::Mortal => "Mortal",
        };
        write!(f, "{etiqueta}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nd_weights() {
        assert_eq!(NivelDeficiencia::Bajo.valor(), 0);
        assert_eq!(NivelDeficiencia::Medio.valor(), 2);
        assert_eq!(NivelDeficiencia::Alto.valor(), 6);
        assert_eq!(NivelDeficiencia::MuyAlto.valor(), 10);
    }

    #[test]
    fn test_ne_weights() {
        assert_eq!(NivelExposicion::Esporadica.valor(), 1);
        assert_eq!(NivelExposicion::Ocasional.valor(), 2);
        assert_eq!(NivelExposicion::Frecuente.valor(), 3);
        assert_eq!(NivelExposicion::Continua.valor(), 4);
    }

    #[test]
    fn test_nc_weights() {
        assert_eq!(NivelConsecuencia::Leve.valor(), 10);
        assert_eq!(NivelConsecuencia::Grave.valor(), 25);
        assert_eq!(NivelConsecuencia::MuyGrave.valor(), 60);
        assert_eq!(NivelConsecuencia::Mortal.valor(), 100);
    }

    #[test]
    fn test_try_from_roundtrip() {
        for nd in NivelDeficiencia::TODOS {
            assert_eq!(NivelDeficiencia::try_from(nd.valor()).unwrap(), nd);
        }
        for ne in NivelExposicion::TODOS {
            assert_eq!(NivelExposicion::try_from(ne.valor()).unwrap(), ne);
        }
        for nc in NivelConsecuencia::TODOS {
            assert_eq!(NivelConsecuencia::try_from(nc.valor()).unwrap(), nc);
        }
    }

    #[test]
    fn test_try_from_rejects_out_of_set() {
        assert!(NivelDeficiencia::try_from(5).is_err());
        assert!(NivelDeficiencia::try_from(1).is_err());
        assert!(NivelExposicion::try_from(0).is_err());
        assert!(NivelExposicion::try_from(5).is_err());
        assert!(NivelConsecuencia::try_from(50).is_err());
        assert!(NivelConsecuencia::try_from(0).is_err());
    }

    #[test]
    fn test_ordering_follows_severity() {
        assert!(NivelDeficiencia::Bajo < NivelDeficiencia::MuyAlto);
        assert!(NivelExposicion::Esporadica < NivelExposicion::Continua);
        assert!(NivelConsecuencia::Leve < NivelConsecuencia::Mortal);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(NivelDeficiencia::MuyAlto.to_string(), "Muy Alto");
        assert_eq!(NivelExposicion::Esporadica.to_string(), "Esporádica");
        assert_eq!(NivelConsecuencia::MuyGrave.to_string(), "Muy Grave");
    }
}
