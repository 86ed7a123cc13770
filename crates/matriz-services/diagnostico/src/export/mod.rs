pub mod csv;
pub mod xlsx;

pub use self::csv::CsvExporter;
pub use self::xlsx::XlsxExporter;

/// Column headers shared by every export format, in matrix order.
pub const ENCABEZADOS: [&str; 13] = [
    "Empresa",
    "NIT",
    "Cargo",
    "Zona",
    "Categoría",
    "GES",
    "ND",
    "NE",
    "NC",
    "NP",
    "NR",
    "Interpretación",
    "Observaciones",
];
