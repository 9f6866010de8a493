pub mod blocks;
pub mod fields;
pub mod normalize;

use crate::model::ExtractedRecord;

/// Three-pass pipeline: raw page text → normalized text → portaria blocks →
/// extracted records. Zero blocks match, zero records come out.
pub fn parse_document(raw: &str) -> Vec<ExtractedRecord> {
    let text = normalize::normalize(raw);
    blocks::split_blocks(&text)
        .iter()
        .map(|block| extract_record(block))
        .collect()
}

fn extract_record(block: &str) -> ExtractedRecord {
    ExtractedRecord {
        numero: fields::numero(block),
        data: fields::data(block),
        nome: fields::nome(block),
        matricula: fields::matricula(block),
        cargo: fields::cargo(block),
        orgao: fields::orgao(block),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.txt", name)).unwrap()
    }

    #[test]
    fn edicao_fixture_yields_matching_portarias_only() {
        let records = parse_document(&fixture("edicao_julho"));
        // Three portarias in the fixture; the licença-prêmio one lacks the
        // target phrase and is dropped.
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn edicao_fixture_first_portaria() {
        let records = parse_document(&fixture("edicao_julho"));
        let r = &records[0];
        assert_eq!(r.numero.as_deref(), Some("1482"));
        assert_eq!(r.data.as_deref(), Some("14/07/2025"));
        assert_eq!(r.nome.as_deref(), Some("MARIA HELENA DOS SANTOS"));
        assert_eq!(r.matricula.as_deref(), Some("2451873-0-01"));
        assert_eq!(r.cargo.as_deref(), Some("Professor"));
        assert_eq!(r.orgao.as_deref(), Some("SED"));
    }

    #[test]
    fn edicao_fixture_repairs_wrapped_matricula() {
        let records = parse_document(&fixture("edicao_julho"));
        let r = &records[1];
        assert_eq!(r.nome.as_deref(), Some("ANA LÚCIA FERREIRA"));
        assert_eq!(r.matricula.as_deref(), Some("3102945-6-03"));
        assert_eq!(r.orgao.as_deref(), Some("SDS"));
    }

    #[test]
    fn document_without_target_phrase_yields_nothing() {
        assert!(parse_document(&fixture("edicao_sem_alvo")).is_empty());
    }

    #[test]
    fn empty_document_yields_nothing() {
        assert!(parse_document("").is_empty());
    }
}
