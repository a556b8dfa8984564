use car_catalog::slug::{FALLBACK_SLUG, slugify};

#[test]
fn hyphenated_brand() {
    assert_eq!(slugify("Mercedes-Benz"), "mercedes-benz");
}

#[test]
fn diaeresis_is_stripped() {
    assert_eq!(slugify("Citroën"), "citroen");
}

#[test]
fn accents_punctuation_and_padding() {
    assert_eq!(slugify("  ÀÉ!! "), "ae");
}

#[test]
fn never_empty() {
    for input in ["", " ", "\t\n", "!!!", "---", "אודי", "(*)"] {
        assert_eq!(slugify(input), FALLBACK_SLUG, "input {input:?}");
    }
}

#[test]
fn idempotent() {
    let samples = [
        "Mercedes-Benz",
        "Citroën",
        "  ÀÉ!! ",
        "Land Rover",
        "DS 7 Crossback",
        "Alfa Romeo Giulia Quadrifoglio",
        "e-tron GT",
        "",
        "סקודה",
        "BMW i4 M50",
        "--x--",
    ];
    for s in samples {
        let once = slugify(s);
        assert_eq!(slugify(&once), once, "input {s:?}");
    }
}

#[test]
fn output_alphabet() {
    for s in ["Škoda Octavia RS", "Toyota C-HR", "Kia e-Niro 64 kWh", "Ａｕｄｉ"] {
        let slug = slugify(s);
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "{slug}"
        );
        assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug}");
        assert!(!slug.contains("--"), "{slug}");
    }
}
