//! Presentation-only formatting helpers.
//!
//! None of these alter canonical stored values; they exist so clients can
//! render keys and tax identifiers the way Brazilian users expect.

/// Group an access key into 4-digit blocks separated by spaces.
pub fn format_access_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + key.len() / 4);
    for (i, c) in key.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Strip leading zeros for display.
///
/// Idempotent; an all-zero value collapses to `"0"`. The canonical stored
/// value keeps its zeros.
pub fn strip_leading_zeros(value: &str) -> &str {
    let stripped = value.trim_start_matches('0');
    if stripped.is_empty() && !value.is_empty() {
        "0"
    } else {
        stripped
    }
}

/// Format a 14-digit CNPJ as `XX.XXX.XXX/XXXX-XX`.
///
/// Anything that is not 14 digits is returned untouched.
pub fn format_cnpj(cnpj: &str) -> String {
    if cnpj.len() != 14 || !cnpj.bytes().all(|b| b.is_ascii_digit()) {
        return cnpj.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &cnpj[0..2],
        &cnpj[2..5],
        &cnpj[5..8],
        &cnpj[8..12],
        &cnpj[12..14]
    )
}

/// Format an 11-digit CPF as `XXX.XXX.XXX-XX`.
///
/// Anything that is not 11 digits is returned untouched.
pub fn format_cpf(cpf: &str) -> String {
    if cpf.len() != 11 || !cpf.bytes().all(|b| b.is_ascii_digit()) {
        return cpf.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &cpf[0..3],
        &cpf[3..6],
        &cpf[6..9],
        &cpf[9..11]
    )
}

/// Format a recipient document, dispatching on CPF (11) or CNPJ (14) length.
pub fn format_document(document: &str) -> String {
    match document.len() {
        11 => format_cpf(document),
        14 => format_cnpj(document),
        _ => document.to_string(),
    }
}
