//! Lightweight invoice document sniffing.

/// Check whether a payload is plausibly an NFe XML document.
///
/// Looks for the root element marker only. This is deliberately not schema
/// validation: it is just enough to refuse obviously wrong input before a
/// remote conversion call is spent on it.
pub fn looks_like_nfe(xml: &str) -> bool {
    xml.contains("<NFe") || xml.contains("<nfe")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_nfe_documents() {
        assert!(looks_like_nfe(
            r#"<NFe xmlns="http://www.portalfiscal.inf.br/nfe"><infNFe/></NFe>"#
        ));
        assert!(looks_like_nfe("<nfeProc><NFe/></nfeProc>"));
        assert!(looks_like_nfe("<?xml version=\"1.0\"?>\n<nfe></nfe>"));
    }

    #[test]
    fn test_rejects_other_content() {
        assert!(!looks_like_nfe(""));
        assert!(!looks_like_nfe("<NotAnInvoice/>"));
        assert!(!looks_like_nfe("{\"not\": \"xml\"}"));
        assert!(!looks_like_nfe("plain text"));
    }
}
