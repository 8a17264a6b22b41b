//! Localized keyword resolution.
//!
//! Each supported language maps canonical keywords to the spellings the
//! Gherkin dialect accepts. Lookup is a pure function of
//! `(language, raw text)`; there is no global registry.

use serde::Serialize;

use crate::error::MappingError;

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Canonical keyword, independent of the document's language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Given,
    When,
    Then,
    And,
    But,
    Feature,
    Background,
    Scenario,
    ScenarioOutline,
    Examples,
}

impl Keyword {
    /// Resolution order. Step keywords come first so the shared `*`
    /// spelling resolves to `Given`.
    pub const ALL: [Keyword; 10] = [
        Keyword::Given,
        Keyword::When,
        Keyword::Then,
        Keyword::And,
        Keyword::But,
        Keyword::Feature,
        Keyword::Background,
        Keyword::Scenario,
        Keyword::ScenarioOutline,
        Keyword::Examples,
    ];
}

/// Spellings for one language, already trimmed.
struct Dialect {
    tag: &'static str,
    feature: &'static [&'static str],
    background: &'static [&'static str],
    scenario: &'static [&'static str],
    scenario_outline: &'static [&'static str],
    examples: &'static [&'static str],
    given: &'static [&'static str],
    when: &'static [&'static str],
    then: &'static [&'static str],
    and: &'static [&'static str],
    but: &'static [&'static str],
}

impl Dialect {
    fn spellings(&self, keyword: Keyword) -> &'static [&'static str] {
        match keyword {
            Keyword::Given => self.given,
            Keyword::When => self.when,
            Keyword::Then => self.then,
            Keyword::And => self.and,
            Keyword::But => self.but,
            Keyword::Feature => self.feature,
            Keyword::Background => self.background,
            Keyword::Scenario => self.scenario,
            Keyword::ScenarioOutline => self.scenario_outline,
            Keyword::Examples => self.examples,
        }
    }
}

static DIALECTS: &[Dialect] = &[
    Dialect {
        tag: "en",
        feature: &["Feature", "Business Need", "Ability"],
        background: &["Background"],
        scenario: &["Scenario"],
        scenario_outline: &["Scenario Outline", "Scenario Template"],
        examples: &["Examples", "Scenarios"],
        given: &["*", "Given"],
        when: &["*", "When"],
        then: &["*", "Then"],
        and: &["*", "And"],
        but: &["*", "But"],
    },
    Dialect {
        tag: "fr",
        feature: &["Fonctionnalité"],
        background: &["Contexte"],
        scenario: &["Scénario"],
        scenario_outline: &["Plan du scénario", "Plan du Scénario"],
        examples: &["Exemples"],
        given: &[
            "*",
            "Soit",
            "Etant donné que",
            "Etant donné qu'",
            "Etant donné",
            "Etant donnée",
            "Etant donnés",
            "Etant données",
            "Étant donné que",
            "Étant donné qu'",
            "Étant donné",
            "Étant donnée",
            "Étant donnés",
            "Étant données",
        ],
        when: &["*", "Quand", "Lorsque", "Lorsqu'"],
        then: &["*", "Alors"],
        and: &["*", "Et que", "Et qu'", "Et"],
        but: &["*", "Mais que", "Mais qu'", "Mais"],
    },
    Dialect {
        tag: "de",
        feature: &["Funktionalität"],
        background: &["Grundlage"],
        scenario: &["Szenario"],
        scenario_outline: &["Szenariogrundriss"],
        examples: &["Beispiele"],
        given: &["*", "Angenommen", "Gegeben sei", "Gegeben seien"],
        when: &["*", "Wenn"],
        then: &["*", "Dann"],
        and: &["*", "Und"],
        but: &["*", "Aber"],
    },
    Dialect {
        tag: "nl",
        feature: &["Functionaliteit"],
        background: &["Achtergrond"],
        scenario: &["Scenario"],
        scenario_outline: &["Abstract Scenario"],
        examples: &["Voorbeelden"],
        given: &["*", "Gegeven", "Stel"],
        when: &["*", "Als", "Wanneer"],
        then: &["*", "Dan"],
        and: &["*", "En"],
        but: &["*", "Maar"],
    },
    Dialect {
        tag: "es",
        feature: &["Característica"],
        background: &["Antecedentes"],
        scenario: &["Escenario"],
        scenario_outline: &["Esquema del escenario"],
        examples: &["Ejemplos"],
        given: &["*", "Dado", "Dada", "Dados", "Dadas"],
        when: &["*", "Cuando"],
        then: &["*", "Entonces"],
        and: &["*", "Y", "E"],
        but: &["*", "Pero"],
    },
];

fn dialect(language: &str) -> Option<&'static Dialect> {
    let find = |tag: &str| {
        DIALECTS
            .iter()
            .find(|dialect| dialect.tag.eq_ignore_ascii_case(tag))
    };
    find(language).or_else(|| {
        let primary = language.split(['-', '_']).next()?;
        find(primary)
    })
}

/// Returns the canonical tag for `language` if a keyword table exists for it.
///
/// Regional tags fall back to their primary subtag (`en-US` → `en`).
pub fn supported_language(language: &str) -> Option<&'static str> {
    dialect(language).map(|dialect| dialect.tag)
}

/// Resolve raw keyword text (e.g. `"Given "`) in `language`.
pub fn resolve_keyword(language: &str, raw: &str) -> Result<Keyword, MappingError> {
    let dialect =
        dialect(language).ok_or_else(|| MappingError::UnsupportedLanguage(language.to_string()))?;
    let text = raw.trim();
    Keyword::ALL
        .into_iter()
        .find(|&keyword| {
            dialect
                .spellings(keyword)
                .iter()
                .any(|spelling| *spelling == text)
        })
        .ok_or_else(|| MappingError::KeywordResolution {
            keyword: raw.to_string(),
            language: dialect.tag.to_string(),
        })
}
