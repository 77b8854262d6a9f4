//! Crosswalk tables
//!
//! A crosswalk maps the codes of one release's code set onto another's. Every
//! table is plain data: explicit `(source, target)` pairs plus a default arm
//! for anything unmatched, so a lookup never fails. Tables are authored per
//! direction; the reverse of a table is not derived from it.
//!
//! Tables are typed (`CodeCrosswalk<S, T>`) for converters and also reachable
//! by id at the string level through [`table`] and [`tables`].

use ferrum_models::{CodeableConcept, Coding, FhirCode};
use tracing::debug;

/// Code-set to code-set mapping.
#[derive(Debug)]
pub struct CodeCrosswalk<S: 'static, T: 'static> {
    pub id: &'static str,
    pub pairs: &'static [(S, T)],
    /// Result for an absent or unmatched source code.
    pub default: Option<T>,
    /// Forward codes whose target does not map back to them.
    pub non_invertible: &'static [S],
}

impl<S: FhirCode, T: FhirCode> CodeCrosswalk<S, T> {
    pub fn map(&self, src: Option<S>) -> Option<T> {
        let Some(src) = src else {
            return self.default;
        };
        match self.pairs.iter().find(|(s, _)| *s == src) {
            Some((_, t)) => Some(*t),
            None => {
                debug!(table = self.id, code = src.code(), "crosswalk default arm");
                self.default
            }
        }
    }

    pub fn is_invertible(&self, src: S) -> bool {
        !self.non_invertible.contains(&src)
    }
}

/// Mapping from a coded concept, matched on literal `system|code` tokens,
/// to a code-set value.
#[derive(Debug)]
pub struct ConceptCrosswalk<T: 'static> {
    pub id: &'static str,
    pub entries: &'static [(&'static str, T)],
}

impl<T: FhirCode> ConceptCrosswalk<T> {
    /// First coding (in order) that matches any entry wins.
    pub fn map(&self, concept: &CodeableConcept) -> Option<T> {
        concept
            .coding
            .iter()
            .find_map(|coding| self.map_coding(coding))
    }

    fn map_coding(&self, coding: &Coding) -> Option<T> {
        self.entries
            .iter()
            .find(|(token, _)| {
                let (system, code) = split_token(token);
                coding.system.as_deref() == system && coding.code.as_deref() == Some(code)
            })
            .map(|(_, value)| *value)
    }
}

/// Mapping from a code-set value to a single-coding concept.
#[derive(Debug)]
pub struct ConceptReverseCrosswalk<T: 'static> {
    pub id: &'static str,
    pub entries: &'static [(T, &'static str)],
}

impl<T: FhirCode> ConceptReverseCrosswalk<T> {
    pub fn map(&self, src: Option<T>) -> Option<CodeableConcept> {
        let src = src?;
        let (_, token) = self.entries.iter().find(|(value, _)| *value == src)?;
        let (system, code) = split_token(token);
        Some(CodeableConcept::from_coding(Coding {
            system: system.map(str::to_string),
            code: Some(code.to_string()),
            ..Default::default()
        }))
    }
}

fn split_token(token: &str) -> (Option<&str>, &str) {
    match token.split_once('|') {
        Some((system, code)) => (Some(system), code),
        None => (None, token),
    }
}

/// String-level view of a crosswalk, used for lookup by id.
///
/// Concept codes use token notation, `system|code`.
pub trait CrosswalkTable: Sync {
    fn id(&self) -> &'static str;

    /// Every source code the table has an explicit pair for.
    fn source_codes(&self) -> Vec<&'static str>;

    /// Total: unknown codes fall to the default arm.
    fn map_code(&self, code: &str) -> Option<&'static str>;

    /// Source codes documented as having no faithful inverse.
    fn non_invertible(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

impl<S: FhirCode, T: FhirCode> CrosswalkTable for CodeCrosswalk<S, T> {
    fn id(&self) -> &'static str {
        self.id
    }

    fn source_codes(&self) -> Vec<&'static str> {
        self.pairs.iter().map(|(s, _)| s.code()).collect()
    }

    fn map_code(&self, code: &str) -> Option<&'static str> {
        match S::from_code(code) {
            Some(src) => self.map(Some(src)).map(FhirCode::code),
            None => self.default.map(FhirCode::code),
        }
    }

    fn non_invertible(&self) -> Vec<&'static str> {
        self.non_invertible.iter().map(|s| s.code()).collect()
    }
}

impl<T: FhirCode> CrosswalkTable for ConceptCrosswalk<T> {
    fn id(&self) -> &'static str {
        self.id
    }

    fn source_codes(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(token, _)| *token).collect()
    }

    fn map_code(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(token, _)| *token == code)
            .map(|(_, value)| value.code())
    }
}

impl<T: FhirCode> CrosswalkTable for ConceptReverseCrosswalk<T> {
    fn id(&self) -> &'static str {
        self.id
    }

    fn source_codes(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(value, _)| value.code()).collect()
    }

    fn map_code(&self, code: &str) -> Option<&'static str> {
        let src = T::from_code(code)?;
        self.entries
            .iter()
            .find(|(value, _)| *value == src)
            .map(|(_, token)| *token)
    }
}

/// Every registered table, ordered by id.
pub fn tables() -> Vec<&'static dyn CrosswalkTable> {
    let mut all: Vec<&'static dyn CrosswalkTable> = crate::conv10_30::crosswalks::TABLES
        .values()
        .copied()
        .collect();
    all.sort_by_key(|t| t.id());
    all
}

/// Look up a table by id.
pub fn table(id: &str) -> Option<&'static dyn CrosswalkTable> {
    crate::conv10_30::crosswalks::TABLES.get(id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrum_models::dstu2::{DeviceMetricColor as Dstu2Color, IdentifierUse};
    use ferrum_models::stu3::DeviceMetricColor as Stu3Color;

    static COLOR: CodeCrosswalk<Dstu2Color, Stu3Color> = CodeCrosswalk {
        id: "Color",
        pairs: &[(Dstu2Color::Red, Stu3Color::Red)],
        default: None,
        non_invertible: &[],
    };

    static USE: ConceptCrosswalk<IdentifierUse> = ConceptCrosswalk {
        id: "Use",
        entries: &[("http://example.org/use|official", IdentifierUse::Official)],
    };

    #[test]
    fn test_code_crosswalk_default_arm() {
        assert_eq!(COLOR.map(Some(Dstu2Color::Red)), Some(Stu3Color::Red));
        assert_eq!(COLOR.map(Some(Dstu2Color::Blue)), None);
        assert_eq!(COLOR.map(None), None);
        assert_eq!(COLOR.map_code("red"), Some("red"));
        assert_eq!(COLOR.map_code("not-a-color"), None);
    }

    #[test]
    fn test_concept_crosswalk_first_match() {
        let concept = CodeableConcept {
            coding: vec![
                Coding::new("http://other.org", "official"),
                Coding::new("http://example.org/use", "official"),
            ],
            ..Default::default()
        };
        assert_eq!(USE.map(&concept), Some(IdentifierUse::Official));
        assert_eq!(USE.map_code("http://example.org/use|official"), Some("official"));
        assert_eq!(USE.map_code("official"), None);
    }
}
