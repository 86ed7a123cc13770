use crate::error::{MatrizError, Result};
use crate::export::ENCABEZADOS;
use crate::models::MatrizFila;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

#[derive(Clone)]
pub struct XlsxExporter;

impl XlsxExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the risk matrix as an XLSX workbook, returned as bytes.
    pub fn export(&self, filas: &[MatrizFila]) -> Result<Vec<u8>> {
        self.render(filas)
            .map_err(|e| MatrizError::export(format!("XLSX writer error: {}", e)))
    }

    fn render(&self, filas: &[MatrizFila]) -> std::result::Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Matriz de Riesgos")?;

        let encabezado = Format::new().set_bold();
        for (col, titulo) in ENCABEZADOS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *titulo, &encabezado)?;
        }

        for (i, fila) in filas.iter().enumerate() {
            let row = (i + 1) as u32;
            worksheet.write_string(row, 0, &fila.empresa)?;
            worksheet.write_string(row, 1, &fila.nit)?;
            worksheet.write_string(row, 2, &fila.cargo)?;
            worksheet.write_string(row, 3, fila.zona.as_deref().unwrap_or(""))?;
            worksheet.write_string(row, 4, &fila.categoria)?;
            worksheet.write_string(row, 5, &fila.ges)?;
            worksheet.write_number(row, 6, fila.nd as f64)?;
            worksheet.write_number(row, 7, fila.ne as f64)?;
            worksheet.write_number(row, 8, fila.nc as f64)?;
            worksheet.write_number(row, 9, fila.np as f64)?;
            worksheet.write_number(row, 10, fila.nr as f64)?;
            worksheet.write_string(row, 11, &fila.interpretacion)?;
            worksheet.write_string(row, 12, fila.observaciones.as_deref().unwrap_or(""))?;
        }

        workbook.save_to_buffer()
    }
}

impl Default for XlsxExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fila_ejemplo() -> MatrizFila {
        MatrizFila {
            empresa: "Acme SAS".to_string(),
            nit: "900123456-7".to_string(),
            cargo: "Soldador".to_string(),
            zona: None,
            categoria: "Físico".to_string(),
            ges: "Ruido".to_string(),
            nd: 6,
            ne: 3,
            nc: 25,
            np: 18,
            nr: 450,
            interpretacion: "NoAceptableConControl".to_string(),
            observaciones: Some("Usar protección auditiva".to_string()),
        }
    }

    #[test]
    fn test_xlsx_export_empty_produces_workbook() {
        let exporter = XlsxExporter::new();
        let bytes = exporter.export(&[]).unwrap();

        // XLSX files are ZIP archives: PK magic
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_xlsx_export_with_rows() {
        let exporter = XlsxExporter::new();
        let bytes = exporter.export(&[fila_ejemplo()]).unwrap();
        assert_eq!(&bytes[0..2], b"PK");

        // More rows should not shrink the archive
        let empty = exporter.export(&[]).unwrap();
        assert!(bytes.len() >= empty.len());
    }
}
