/// Latin-1 accented letters and their unaccented base letter.
pub const ACCENT_TABLE: &[(char, char)] = &[
    ('À', 'A'),
    ('Á', 'A'),
    ('Â', 'A'),
    ('Ã', 'A'),
    ('Ä', 'A'),
    ('Å', 'A'),
    ('à', 'a'),
    ('á', 'a'),
    ('â', 'a'),
    ('ã', 'a'),
    ('ä', 'a'),
    ('å', 'a'),
    ('Ç', 'C'),
    ('ç', 'c'),
    ('È', 'E'),
    ('É', 'E'),
    ('Ê', 'E'),
    ('Ë', 'E'),
    ('è', 'e'),
    ('é', 'e'),
    ('ê', 'e'),
    ('ë', 'e'),
    ('Ì', 'I'),
    ('Í', 'I'),
    ('Î', 'I'),
    ('Ï', 'I'),
    ('ì', 'i'),
    ('í', 'i'),
    ('î', 'i'),
    ('ï', 'i'),
    ('Ñ', 'N'),
    ('ñ', 'n'),
    ('Ò', 'O'),
    ('Ó', 'O'),
    ('Ô', 'O'),
    ('Õ', 'O'),
    ('Ö', 'O'),
    ('Ø', 'O'),
    ('ò', 'o'),
    ('ó', 'o'),
    ('ô', 'o'),
    ('õ', 'o'),
    ('ö', 'o'),
    ('ø', 'o'),
    ('Ù', 'U'),
    ('Ú', 'U'),
    ('Û', 'U'),
    ('Ü', 'U'),
    ('ù', 'u'),
    ('ú', 'u'),
    ('û', 'u'),
    ('ü', 'u'),
    ('Ý', 'Y'),
    ('ý', 'y'),
    ('ÿ', 'y'),
];

pub fn fold_char(ch: char) -> Option<char> {
    ACCENT_TABLE
        .iter()
        .find(|(accented, _)| *accented == ch)
        .map(|(_, base)| *base)
}

/// Returns the folded text and whether any substitution happened.
pub fn fold_accents(text: &str) -> (String, bool) {
    text.chars()
        .fold((String::with_capacity(text.len()), false), |(mut out, hit), ch| {
            match fold_char(ch) {
                Some(base) => {
                    out.push(base);
                    (out, true)
                }
                None => {
                    out.push(ch);
                    (out, hit)
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_both_cases() {
        assert_eq!(fold_accents("ÀéÑçÜ"), ("AeNcU".to_string(), true));
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(fold_accents("plain 123"), ("plain 123".to_string(), false));
        assert_eq!(fold_accents(""), (String::new(), false));
    }

    #[test]
    fn table_maps_only_to_ascii() {
        for (accented, base) in ACCENT_TABLE {
            assert!(!accented.is_ascii(), "{accented} should be non-ascii");
            assert!(base.is_ascii_alphabetic(), "{base} should be ascii");
        }
    }

    #[test]
    fn non_latin_characters_are_kept() {
        assert_eq!(fold_accents("資產 ß"), ("資產 ß".to_string(), false));
    }
}
