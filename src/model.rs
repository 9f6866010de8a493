use serde::Deserialize;
use serde_json::Value;

/// One search hit from the matéria API. Never mutated after arrival.
#[derive(Debug, Clone, Deserialize)]
pub struct Materia {
    #[serde(rename = "cdJornal")]
    pub cd_jornal: i64,
    #[serde(rename = "cd_materia")]
    pub cd_materia: i64,
    #[serde(rename = "dtPublicacaoJornal", default)]
    pub dt_publicacao_jornal: String,
    #[serde(rename = "vlNumero", default)]
    pub vl_numero: Value,
    #[serde(rename = "ds_titulo", default)]
    pub ds_titulo: String,
}

impl Materia {
    /// Date portion of the publication timestamp ("2025-07-14T03:00:00" → "2025-07-14").
    pub fn data_publicacao(&self) -> String {
        self.dt_publicacao_jornal.chars().take(10).collect()
    }

    /// The portal returns `vlNumero` as a JSON number or a string depending on
    /// the edition; render either as plain text.
    pub fn edicao(&self) -> String {
        match &self.vl_numero {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Fields pulled from one portaria block. Every extractor is best-effort, so
/// every field is optional.
#[derive(Debug, Clone, Default)]
pub struct ExtractedRecord {
    pub numero: Option<String>,
    pub data: Option<String>,
    pub nome: Option<String>,
    pub matricula: Option<String>,
    pub cargo: Option<String>,
    pub orgao: Option<String>,
}

/// One output spreadsheet row: an extracted portaria joined with its edition's
/// publication date and number. Absent fields export as empty strings.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub nome: String,
    pub matricula: String,
    pub cargo: String,
    pub orgao: String,
    pub data_publicacao: String,
    pub edicao: String,
    pub numero_portaria: String,
    pub data_portaria: String,
}

impl ResultRow {
    pub fn new(record: ExtractedRecord, materia: &Materia) -> Self {
        Self {
            nome: record.nome.unwrap_or_default(),
            matricula: record.matricula.unwrap_or_default(),
            cargo: record.cargo.unwrap_or_default(),
            orgao: record.orgao.unwrap_or_default(),
            data_publicacao: materia.data_publicacao(),
            edicao: materia.edicao(),
            numero_portaria: record.numero.unwrap_or_default(),
            data_portaria: record.data.unwrap_or_default(),
        }
    }
}
