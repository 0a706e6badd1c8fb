//! FILENAME: core/codegen/src/naming.rs
//! PURPOSE: Maps sheet column and table names onto Rust identifiers.
//!
//! RULES:
//! - Words break on any non-alphanumeric ASCII character, on a lower-to-upper
//!   transition (`heroName`), and before the last capital of an acronym
//!   followed by lowercase (`HPMax` -> `hp_max`).
//! - Identifiers that start with a digit get a leading underscore.
//! - Keywords become raw identifiers (`type` -> `r#type`).

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override",
    "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be raw identifiers either.
const RESERVED: &[&str] = &["self", "Self", "super", "crate", "_"];

fn words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        let prev = if i > 0 { chars.get(i - 1) } else { None };
        let next = chars.get(i + 1);
        let boundary = ch.is_ascii_uppercase()
            && !current.is_empty()
            && match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };

        if boundary {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch.to_ascii_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

pub fn to_snake_case(name: &str) -> String {
    words(name).join("_")
}

pub fn to_pascal_case(name: &str) -> String {
    words(name)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Snake-case field identifier, or `None` if nothing usable remains.
pub fn field_ident(name: &str) -> Option<String> {
    let snake = to_snake_case(name);
    if snake.is_empty() {
        return None;
    }
    let ident = if snake.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", snake)
    } else {
        snake
    };

    if RESERVED.contains(&ident.as_str()) {
        Some(format!("{}_", ident))
    } else if KEYWORDS.contains(&ident.as_str()) {
        Some(format!("r#{}", ident))
    } else {
        Some(ident)
    }
}

/// PascalCase type identifier with `suffix` appended.
pub fn type_ident(table: &str, suffix: &str) -> Option<String> {
    let pascal = to_pascal_case(table);
    if pascal.is_empty() {
        return None;
    }
    if pascal.starts_with(|c: char| c.is_ascii_digit()) {
        Some(format!("Table{}{}", pascal, suffix))
    } else {
        Some(format!("{}{}", pascal, suffix))
    }
}

/// Module (and file stem) name for a table's generated source. Keywords get
/// a trailing underscore instead of the raw prefix so the name also works
/// as a file name.
pub fn module_ident(table: &str) -> Option<String> {
    field_ident(table).map(|ident| match ident.strip_prefix("r#") {
        Some(bare) => format!("{}_", bare),
        None => ident,
    })
}
