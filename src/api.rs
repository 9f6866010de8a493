use anyhow::{Context, Result};
use serde_json::Value;
use tracing::warn;

use crate::model::Materia;

const BASE_URL: &str = "https://portal.doe.sea.sc.gov.br";
const USER_AGENT: &str = "Mozilla/5.0";

// Fixed search filter: assunto 35 / categoria 4704302 plus the free-text
// phrase, which together select the pension portarias of interest.
const ASSUNTO: &str = "35";
const CATEGORIA: &str = "4704302";
const DS_MATERIA: &str = "calculados sobre a média das contribuições";

/// Thin client for the DOE/SC portal APIs. All calls are sequential; HTTP-level
/// failures degrade to empty results and only transport faults are errors.
pub struct DoeClient {
    http: reqwest::Client,
}

impl DoeClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http })
    }

    /// Search matérias for one (year, month). Non-success responses and
    /// non-list payloads both come back as an empty list; elements that do not
    /// deserialize are skipped.
    pub async fn search_materias(&self, ano: i32, mes: u32) -> Result<Vec<Materia>> {
        let resp = self
            .http
            .get(format!("{}/apis/materia/materia", BASE_URL))
            .query(&[
                ("ano", ano.to_string()),
                ("mes", mes.to_string()),
                ("assunto", ASSUNTO.to_string()),
                ("categoria", CATEGORIA.to_string()),
                ("dsMateria", DS_MATERIA.to_string()),
                ("tipoBusca", "1".to_string()),
                ("ondePesquisar", "4".to_string()),
            ])
            .send()
            .await
            .context("Matéria search request failed")?;

        if !resp.status().is_success() {
            warn!("Search {}/{} returned {}", mes, ano, resp.status());
            return Ok(Vec::new());
        }

        let payload: Value = match resp.json().await {
            Ok(v) => v,
            Err(_) => return Ok(Vec::new()),
        };
        let Some(items) = payload.as_array() else {
            return Ok(Vec::new());
        };

        Ok(items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect())
    }

    /// Resolve a matéria to its PDF extract URL. Non-success responses and a
    /// missing `urlExtratoArquivo` field both come back as `None`; the caller
    /// skips the item.
    pub async fn resolve_pdf_url(&self, cd_jornal: i64, cd_materia: i64) -> Result<Option<String>> {
        let url = format!(
            "{}/apis/edicao-preview/extrato/edicao/{}/materia/{}",
            BASE_URL, cd_jornal, cd_materia
        );
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .context("Extract lookup request failed")?;

        if !resp.status().is_success() {
            warn!("Extract lookup for matéria {} returned {}", cd_materia, resp.status());
            return Ok(None);
        }

        let payload: Value = match resp.json().await {
            Ok(v) => v,
            Err(_) => return Ok(None),
        };
        Ok(payload
            .get("urlExtratoArquivo")
            .and_then(|v| v.as_str())
            .map(str::to_string))
    }

    /// Download one PDF; `None` on a non-success status.
    pub async fn download_pdf(&self, url: &str) -> Result<Option<Vec<u8>>> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .context("PDF download request failed")?;

        if !resp.status().is_success() {
            warn!("PDF download returned {}: {}", resp.status(), url);
            return Ok(None);
        }

        let bytes = resp.bytes().await.context("PDF body read failed")?;
        Ok(Some(bytes.to_vec()))
    }
}
