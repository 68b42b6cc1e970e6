//! Host render hook support: recognise marked inline-code spans and build
//! the data the host needs to draw the term and its tooltip.

use crate::definitions::marker::SENTINEL;
use crate::definitions::map::DefinitionMap;
use crate::definitions::resolver::{Lookup, resolve};
use glossary_types::{DefinitionSettings, NO_DEFINITION_FOUND, RenderedTerm};

/// Extract the raw term from an inline code span's text, if it is marked
/// (`%term%` after trimming). A lone `%` is not a marked span.
pub fn parse_marked_span(code_text: &str) -> Option<&str> {
    let text = code_text.trim();
    let inner = text.strip_prefix(SENTINEL)?.strip_suffix(SENTINEL)?;
    Some(inner.trim())
}

/// Presentation data for a marked span, `None` for ordinary code spans
pub fn render_marked_span(
    code_text: &str,
    map: &DefinitionMap,
    settings: &DefinitionSettings,
) -> Option<RenderedTerm> {
    let term = parse_marked_span(code_text)?;

    let (tooltip, found) = match resolve(term, map) {
        Lookup::Found(def) => (def.trim().to_string(), true),
        Lookup::NotFound => (NO_DEFINITION_FOUND.to_string(), false),
    };

    Some(RenderedTerm {
        term: term.to_string(),
        tooltip,
        color: settings.definition_color.clone(),
        found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marked_span() {
        assert_eq!(parse_marked_span("%cat%"), Some("cat"));
        assert_eq!(parse_marked_span("  % Big Cat %  "), Some("Big Cat"));
        assert_eq!(parse_marked_span("%%"), Some(""));
        assert_eq!(parse_marked_span("%"), None);
        assert_eq!(parse_marked_span("cat%"), None);
        assert_eq!(parse_marked_span("let x = 5 % 2"), None);
    }

    #[test]
    fn test_render_found_term() {
        let mut map = DefinitionMap::new();
        map.insert("cat", " a small domesticated feline");
        let settings = DefinitionSettings::default();

        let rendered = render_marked_span("%Cats%", &map, &settings).unwrap();
        assert_eq!(rendered.term, "Cats");
        assert_eq!(rendered.tooltip, "a small domesticated feline");
        assert_eq!(rendered.color, "#0000FF");
        assert!(rendered.found);
    }

    #[test]
    fn test_render_unknown_term_uses_fallback() {
        let map = DefinitionMap::new();
        let settings = DefinitionSettings {
            definition_color: "#123456".to_string(),
            ..Default::default()
        };

        let rendered = render_marked_span("%elephant%", &map, &settings).unwrap();
        assert_eq!(rendered.tooltip, NO_DEFINITION_FOUND);
        assert_eq!(rendered.color, "#123456");
        assert!(!rendered.found);
    }

    #[test]
    fn test_plain_code_span_is_not_rendered() {
        let map = DefinitionMap::new();
        assert!(render_marked_span("println!()", &map, &DefinitionSettings::default()).is_none());
    }
}
