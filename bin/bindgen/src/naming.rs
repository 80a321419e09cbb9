//! Identifier conversion for generated Rust items.

use std::collections::HashSet;

/// Methods every wrapper defines; generated accessors must avoid them.
pub const RESERVED_METHODS: &[&str] = &[
    "new",
    "new_caller",
    "new_transactor",
    "new_filterer",
    "bind",
    "deploy",
    "address",
    "raw",
    "session",
    "transfer",
    "fallback",
];

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Convert a Solidity identifier to `snake_case`.
///
/// A word boundary is a capital following a lowercase letter or digit, or the
/// last capital of an acronym followed by a lowercase letter: `getL1Fee`
/// becomes `get_l1_fee` and `ERC20Token` becomes `erc20_token`.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 && !out.ends_with('_') {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_lower)
            {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }

    out
}

pub fn screaming_snake_case(name: &str) -> String {
    snake_case(name).to_ascii_uppercase()
}

/// Append `_` to identifiers that are Rust keywords.
pub fn escape_keyword(ident: String) -> String {
    if KEYWORDS.contains(&ident.as_str()) {
        format!("{ident}_")
    } else {
        ident
    }
}

/// Rust argument name for the parameter at `index`.
///
/// Solidity's `_value` and `value_` conventions both become `value`;
/// unnamed parameters become `arg0`, `arg1`.
pub fn arg_name(name: &str, index: usize) -> String {
    let trimmed = name.trim_matches('_');
    if trimmed.is_empty() {
        return format!("arg{index}");
    }
    escape_keyword(snake_case(trimmed))
}

/// Make every candidate unique.
///
/// Candidates marked verbatim (their Solidity spelling was already
/// snake_case) claim their name first. The rest take the next free
/// `_1`, `_2` suffix in order.
pub fn resolve(candidates: &[(String, bool)], reserved: &[&str]) -> Vec<String> {
    let mut taken: HashSet<String> = reserved.iter().map(ToString::to_string).collect();
    let mut resolved = vec![String::new(); candidates.len()];

    for verbatim_pass in [true, false] {
        for (slot, (name, verbatim)) in resolved.iter_mut().zip(candidates) {
            if *verbatim != verbatim_pass {
                continue;
            }

            let mut unique = name.clone();
            let mut suffix = 1;
            while !taken.insert(unique.clone()) {
                unique = format!("{name}_{suffix}");
                suffix += 1;
            }
            *slot = unique;
        }
    }

    resolved
}

/// Argument names for a parameter list, deduplicated against `reserved`.
pub fn arg_names<'a>(names: impl Iterator<Item = &'a str>, reserved: &[&str]) -> Vec<String> {
    let candidates: Vec<_> = names
        .enumerate()
        .map(|(i, name)| (arg_name(name, i), false))
        .collect();
    resolve(&candidates, reserved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("getL1Fee"), "get_l1_fee");
        assert_eq!(snake_case("L2ToL1MessagePasser"), "l2_to_l1_message_passer");
        assert_eq!(snake_case("MIN_WITHDRAWAL_AMOUNT"), "min_withdrawal_amount");
        assert_eq!(snake_case("aggregate3Value"), "aggregate3_value");
        assert_eq!(snake_case("setBytes32_0"), "set_bytes32_0");
        assert_eq!(snake_case("ERC20Token"), "erc20_token");
        assert_eq!(snake_case("version"), "version");
        assert_eq!(screaming_snake_case("DelayedVetoable"), "DELAYED_VETOABLE");
    }

    #[test]
    fn test_arg_name() {
        assert_eq!(arg_name("_minWithdrawalAmount", 1), "min_withdrawal_amount");
        assert_eq!(arg_name("vetoer_", 0), "vetoer");
        assert_eq!(arg_name("", 2), "arg2");
        assert_eq!(arg_name("type", 0), "type_");
    }

    #[test]
    fn test_verbatim_names_win() {
        let candidates = [
            ("version".to_string(), false),
            ("version".to_string(), true),
            ("transfer".to_string(), true),
        ];
        assert_eq!(
            resolve(&candidates, RESERVED_METHODS),
            ["version_1", "version", "transfer_1"]
        );
    }

    #[test]
    fn test_arg_names_avoid_reserved() {
        let names = arg_names(["_value", "value", "opts"].into_iter(), &["opts"]);
        assert_eq!(names, ["value", "value_1", "opts_1"]);
    }
}
