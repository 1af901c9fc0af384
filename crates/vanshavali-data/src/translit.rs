//! Latin to Devanagari helper for the name search box.
//!
//! The mapping is greedy: at each position the longest key (three, two, then
//! one character) wins. Characters without a mapping pass through unchanged,
//! so already-Devanagari input survives a second pass.

const WORD_OVERRIDES: &[(&[&str], &str)] = &[
    (&["jengu", "jingu"], "झींगू"),
    (&["smar", "samar"], "समर"),
    (&["patel"], "पटेल"),
];

const TRIGRAPHS: &[(&str, &str)] = &[("chh", "छ"), ("Chh", "छ"), ("CHH", "छ")];

const DIGRAPHS: &[(&str, &str)] = &[
    ("ai", "ै"),
    ("Ai", "ै"),
    ("au", "ौ"),
    ("Au", "ौ"),
    ("kh", "ख"),
    ("Kh", "ख"),
    ("gh", "घ"),
    ("Gh", "घ"),
    ("ch", "च"),
    ("Ch", "च"),
    ("jh", "झ"),
    ("Jh", "झ"),
    ("ph", "फ"),
    ("Ph", "फ"),
    ("bh", "भ"),
    ("Bh", "भ"),
    // Case selects retroflex (lower) or dental (upper).
    ("th", "ठ"),
    ("Th", "थ"),
    ("dh", "ढ"),
    ("Dh", "ध"),
    ("sh", "श"),
    ("Sh", "ष"),
];

fn single(ch: char) -> Option<&'static str> {
    let mapped = match ch {
        'a' | 'A' => "ा",
        'i' => "ि",
        'I' => "ी",
        'u' => "ु",
        'U' => "ू",
        'e' | 'E' => "े",
        'o' | 'O' => "ो",
        'k' | 'K' => "क",
        'g' | 'G' => "ग",
        'j' | 'J' => "ज",
        't' => "ट",
        'T' => "त",
        'd' => "ड",
        'D' => "द",
        'n' | 'N' => "न",
        'p' | 'P' => "प",
        'f' | 'F' => "फ",
        'b' | 'B' => "ब",
        'm' | 'M' => "म",
        'y' | 'Y' => "य",
        'r' | 'R' => "र",
        'l' | 'L' => "ल",
        'v' | 'V' | 'w' | 'W' => "व",
        's' | 'S' => "स",
        'h' | 'H' => "ह",
        ' ' => " ",
        _ => return None,
    };
    Some(mapped)
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, mapped)| *mapped)
}

pub fn transliterate(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lower = text.trim().to_lowercase();
    for (words, replacement) in WORD_OVERRIDES {
        if words.contains(&lower.as_str()) {
            return (*replacement).to_string();
        }
    }

    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len() * 3);
    let mut pos = 0;
    while pos < chars.len() {
        if let Some(mapped) = window(&chars, pos, 3).and_then(|key| lookup(TRIGRAPHS, &key)) {
            result.push_str(mapped);
            pos += 3;
            continue;
        }
        if let Some(mapped) = window(&chars, pos, 2).and_then(|key| lookup(DIGRAPHS, &key)) {
            result.push_str(mapped);
            pos += 2;
            continue;
        }

        let ch = chars[pos];
        match single(ch) {
            // A word-initial `a` is the independent vowel, not the matra.
            Some(_) if pos == 0 && (ch == 'a' || ch == 'A') => result.push('अ'),
            Some(mapped) => result.push_str(mapped),
            None => result.push(ch),
        }
        pos += 1;
    }
    result
}

fn window(chars: &[char], pos: usize, len: usize) -> Option<String> {
    chars.get(pos..pos + len).map(|slice| slice.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_stops_at_end_of_input() {
        let chars: Vec<char> = "ab".chars().collect();
        assert_eq!(window(&chars, 0, 2).as_deref(), Some("ab"));
        assert!(window(&chars, 1, 2).is_none());
    }

    #[test]
    fn trigraph_beats_digraph() {
        assert_eq!(transliterate("chh"), "छ");
        assert_eq!(transliterate("ch"), "च");
    }
}
