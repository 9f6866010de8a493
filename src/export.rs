use std::path::Path;

use anyhow::{Context, Result};

use crate::model::ResultRow;

/// Fixed output column order; the header is written even when there are no rows.
pub const COLUMNS: [&str; 8] = [
    "Nome do Servidor",
    "Matrícula",
    "Cargo",
    "Órgão de Origem",
    "Data de Publicação do DOE",
    "Número da Edição do DOE",
    "Número da Portaria",
    "Data da Portaria",
];

/// Serialize the full run to one CSV file in a single pass.
pub fn write_csv(path: &Path, rows: &[ResultRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record([
            row.nome.as_str(),
            row.matricula.as_str(),
            row.cargo.as_str(),
            row.orgao.as_str(),
            row.data_publicacao.as_str(),
            row.edicao.as_str(),
            row.numero_portaria.as_str(),
            row.data_portaria.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
