//! Identifier case conversion.
//!
//! Words are split on case changes and letter/digit boundaries; acronyms stay
//! whole (`pipelineUID` -> `pipeline_uid`, `JSONData` -> `json_data`). Spaces,
//! hyphens and dots become underscores. Converting an already snake-cased
//! name returns it unchanged.

pub fn to_snake_case(s: &str) -> String {
    delimited(s, '_', false)
}

pub fn to_screaming_snake_case(s: &str) -> String {
    delimited(s, '_', true)
}

fn delimited(s: &str, delimiter: char, screaming: bool) -> String {
    let chars: Vec<char> = s.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 2);

    for (i, &c) in chars.iter().enumerate() {
        let is_cap = c.is_ascii_uppercase();
        let is_low = c.is_ascii_lowercase();
        let is_num = c.is_ascii_digit();
        let v = if screaming {
            c.to_ascii_uppercase()
        } else {
            c.to_ascii_lowercase()
        };

        if let Some(&next) = chars.get(i + 1) {
            let next_cap = next.is_ascii_uppercase();
            let next_low = next.is_ascii_lowercase();
            let next_num = next.is_ascii_digit();

            if (is_cap && (next_low || next_num))
                || (is_low && (next_cap || next_num))
                || (is_num && (next_cap || next_low))
            {
                // last capital of an acronym starts the next word
                if is_cap && next_low && i > 0 && chars[i - 1].is_ascii_uppercase() {
                    out.push(delimiter);
                }
                out.push(v);
                if is_low || is_num || next_num {
                    out.push(delimiter);
                }
                continue;
            }
        }

        if matches!(c, ' ' | '_' | '-' | '.') {
            out.push(delimiter);
        } else {
            out.push(v);
        }
    }

    out
}
