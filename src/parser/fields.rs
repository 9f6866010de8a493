//! Per-field heuristics over one portaria block.
//!
//! Each extractor is an independent pure function returning `Option<String>`;
//! none of them can fail in a way that affects the others. There is no grammar
//! behind these — they encode how the gazette happens to phrase personnel acts.

use std::sync::LazyLock;

use regex::Regex;

use super::blocks::HEADING_RE;

static MATRICULA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{7}-\d-\d{2}").unwrap());
static MATRICULA_ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i), matrícula").unwrap());
static CARGO_ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)no cargo de ").unwrap());
static ORGAO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b([A-Z]{2,}) - [^.]*\.").unwrap());

/// Grant connectors that precede the servidor's name ("concedida a FULANA",
/// "conceder à FULANA", "aposentadoria de FULANO").
const CONNECTORS: &[&str] = &[" à ", " a ", " de "];

/// Portaria number from the block's own heading.
pub fn numero(block: &str) -> Option<String> {
    HEADING_RE.captures(block).map(|caps| caps[1].to_string())
}

/// Portaria date (dd/mm/yyyy) from the block's own heading.
pub fn data(block: &str) -> Option<String> {
    HEADING_RE.captures(block).map(|caps| caps[2].to_string())
}

/// Servidor name: the text between the rightmost grant connector and the
/// first ", matrícula". No connector before the anchor means no name.
pub fn nome(block: &str) -> Option<String> {
    let anchor = MATRICULA_ANCHOR_RE.find(block)?;
    let prefix = &block[..anchor.start()];

    let (at, connector) = CONNECTORS
        .iter()
        .filter_map(|c| prefix.rfind(c).map(|at| (at, *c)))
        .max_by_key(|(at, _)| *at)?;

    let name = prefix[at + connector.len()..].trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// First matrícula anywhere in the block: 7 digits, check digit, 2-digit suffix.
pub fn matricula(block: &str) -> Option<String> {
    MATRICULA_RE.find(block).map(|m| m.as_str().to_string())
}

/// Role title: text after the first "no cargo de", up to the next comma.
pub fn cargo(block: &str) -> Option<String> {
    let anchor = CARGO_ANCHOR_RE.find(block)?;
    let rest = &block[anchor.end()..];
    let title = rest.split(',').next()?.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Originating department: the first all-uppercase acronym introducing a
/// "SIGLA - Full Department Name." clause.
pub fn orgao(block: &str) -> Option<String> {
    ORGAO_RE.captures(block).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "PORTARIA Nº 123 - 01/02/2025. O DIRETOR DE GESTÃO DE PESSOAS \
        resolve conceder aposentadoria a JOÃO DA SILVA, matrícula 1234567-8-90, \
        no cargo de Professor, nível 10, lotado na SED - Secretaria de Estado da \
        Educação. Proventos calculados sobre a média das contribuições.";

    #[test]
    fn numero_and_data_from_heading() {
        assert_eq!(numero(BLOCK).as_deref(), Some("123"));
        assert_eq!(data(BLOCK).as_deref(), Some("01/02/2025"));
    }

    #[test]
    fn numero_none_without_heading() {
        assert_eq!(numero("texto sem cabeçalho"), None);
    }

    #[test]
    fn nome_after_rightmost_connector() {
        // "aposentadoria a JOÃO" wins over the earlier " DE " in the job title
        // because connectors are lowercase and the match is rightmost.
        assert_eq!(nome(BLOCK).as_deref(), Some("JOÃO DA SILVA"));
    }

    #[test]
    fn nome_with_crase_connector() {
        let block = "Conceder aposentadoria à ANA LÚCIA FERREIRA, matrícula 3102945-6-03.";
        assert_eq!(nome(block).as_deref(), Some("ANA LÚCIA FERREIRA"));
    }

    #[test]
    fn nome_none_without_connector() {
        assert_eq!(nome("FULANO DE TAL NÃO PRECEDIDO, matrícula 1234567-8-90"), None);
    }

    #[test]
    fn nome_none_without_matricula_anchor() {
        assert_eq!(nome("conceder a JOÃO DA SILVA, servidor estadual"), None);
    }

    #[test]
    fn nome_anchor_is_case_insensitive() {
        let block = "concedida a MARIA, MATRÍCULA 1234567-8-90";
        assert_eq!(nome(block).as_deref(), Some("MARIA"));
    }

    #[test]
    fn matricula_first_match() {
        assert_eq!(matricula(BLOCK).as_deref(), Some("1234567-8-90"));
    }

    #[test]
    fn matricula_rejects_wrong_shape() {
        assert_eq!(matricula("matrícula 123456-8-90"), None);
        assert_eq!(matricula("matrícula 1234567-89"), None);
    }

    #[test]
    fn cargo_up_to_comma() {
        assert_eq!(cargo(BLOCK).as_deref(), Some("Professor"));
    }

    #[test]
    fn cargo_none_without_anchor() {
        assert_eq!(cargo("sem função declarada"), None);
    }

    #[test]
    fn orgao_acronym_before_dash() {
        assert_eq!(orgao(BLOCK).as_deref(), Some("SED"));
    }

    #[test]
    fn orgao_none_without_clause() {
        assert_eq!(orgao("lotado na secretaria de educação"), None);
    }

    #[test]
    fn extractors_are_isolated() {
        // A block that defeats nome/cargo/orgao still yields matricula.
        let block = "PORTARIA Nº 9 - 02/03/2025. Referente 1234567-8-90 sem mais contexto.";
        assert_eq!(nome(block), None);
        assert_eq!(cargo(block), None);
        assert_eq!(matricula(block).as_deref(), Some("1234567-8-90"));
        assert_eq!(numero(block).as_deref(), Some("9"));
    }
}
