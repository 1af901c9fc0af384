use vanshavali_data::transliterate;

#[test]
fn whole_word_overrides_ignore_case_and_padding() {
    assert_eq!(transliterate("  Samar "), "समर");
    assert_eq!(transliterate("JINGU"), "झींगू");
    assert_eq!(transliterate("patel"), "पटेल");
}

#[test]
fn leading_a_is_independent_vowel() {
    assert_eq!(transliterate("ajay"), "अजाय");
    assert_eq!(transliterate("raja"), "राजा");
}

#[test]
fn case_selects_retroflex_or_dental() {
    assert_eq!(transliterate("th"), "ठ");
    assert_eq!(transliterate("Th"), "थ");
    assert_eq!(transliterate("Sham"), "षाम");
}

#[test]
fn unmapped_characters_pass_through() {
    assert_eq!(transliterate("समर"), "समर");
    assert_eq!(transliterate("x1"), "x1");
    assert_eq!(transliterate(""), "");
}
