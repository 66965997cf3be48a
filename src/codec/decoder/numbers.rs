//! Zahlen-Literale außerhalb des f64-Bereichs.
//!
//! JSON erlaubt `1e400`, serde_json lehnt solche Literale aber ab und verwirft
//! damit den ganzen Payload. Ersetzt durch `null` scheitert nur der betroffene
//! Eintrag an der Koordinatenprüfung.

/// Ersetzt nicht-endliche Zahlen-Literale durch `null`.
///
/// `None`, wenn nichts ersetzt wurde. Inhalte von Strings bleiben unangetastet.
pub(super) fn non_finite_to_null(json: &str) -> Option<String> {
    let mut out = String::with_capacity(json.len());
    let mut patched = false;
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = json.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            continue;
        }

        if c == '-' || c.is_ascii_digit() {
            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if !(next.is_ascii_digit() || matches!(next, '.' | 'e' | 'E' | '+' | '-')) {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
            let literal = &json[start..end];
            if literal.parse::<f64>().is_ok_and(f64::is_infinite) {
                out.push_str("null");
                patched = true;
            } else {
                out.push_str(literal);
            }
            continue;
        }

        out.push(c);
    }

    patched.then_some(out)
}
