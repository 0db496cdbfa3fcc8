// Domains, emails and parentheses must survive chunking intact
// WHY: A period inside "Nike.com.co" or "(cédula o pasaporte)" is never a message boundary

mod integration;

use integration::fixtures::{
    DOMAIN_TEXT, MULTI_DOMAIN_TEXT, NESTED_PARENTHESES_TEXT, PARENTHESES_TEXT,
};
use integration::{assert_balanced_parentheses, split};

#[test]
fn test_plain_domain_not_split() {
    let chunks = split(DOMAIN_TEXT);

    assert!(chunks.iter().any(|c| c.contains("Nike.com.co")), "{chunks:?}");
    assert!(
        !chunks.iter().any(|c| c.contains("Nike.") && !c.contains("Nike.com.co")),
        "Domain was cut: {chunks:?}"
    );
    assert!(
        !chunks.iter().any(|c| c.trim() == "com." || c.trim().starts_with("co)")),
        "Domain fragment emitted: {chunks:?}"
    );
}

#[test]
fn test_multiple_country_code_domains() {
    let chunks = split(MULTI_DOMAIN_TEXT);

    for domain in ["Nike.com.co", "Adidas.com.mx", "Puma.co.uk"] {
        assert!(chunks.iter().any(|c| c.contains(domain)), "{domain} lost: {chunks:?}");
    }
    for fragment in ["com.co", "com.mx", "co.uk"] {
        assert!(!chunks.iter().any(|c| c.trim() == fragment), "{fragment} split off: {chunks:?}");
    }
}

#[test]
fn test_parentheses_with_email_and_question() {
    let chunks = split(PARENTHESES_TEXT);
    assert_balanced_parentheses(&chunks, "parentheses text");
    assert!(
        !chunks.iter().any(|c| c.trim().starts_with(").")),
        "Chunk starts inside a parenthetical: {chunks:?}"
    );
}

#[test]
fn test_parenthetical_sentence() {
    let chunks = split(
        "Este producto tiene características especiales (alta calidad, durabilidad y diseño moderno). También incluye garantía extendida de 2 años. Por favor, revisa los detalles.",
    );
    assert_balanced_parentheses(&chunks, "parenthetical sentence");
}

#[test]
fn test_nested_parentheses() {
    let chunks = split(NESTED_PARENTHESES_TEXT);
    assert_balanced_parentheses(&chunks, "nested parentheses");
}
