#[cfg(test)]
mod tests {
    use crate::{ParseError, parse_pokemon};

    const CHARIZARD: &str = r#"{
        "id": 6,
        "name": "charizard",
        "base_experience": 267,
        "types": [
            { "slot": 2, "type": { "name": "flying", "url": "https://pokeapi.co/api/v2/type/3/" } },
            { "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } }
        ],
        "stats": [
            { "base_stat": 78, "effort": 0, "stat": { "name": "hp" } },
            { "base_stat": 84, "effort": 0, "stat": { "name": "attack" } },
            { "base_stat": 78, "effort": 0, "stat": { "name": "defense" } },
            { "base_stat": 109, "effort": 3, "stat": { "name": "special-attack" } },
            { "base_stat": 85, "effort": 0, "stat": { "name": "special-defense" } },
            { "base_stat": 100, "effort": 0, "stat": { "name": "speed" } }
        ],
        "sprites": { "front_default": "https://example.test/6.png", "back_default": null },
        "cries": { "latest": "https://example.test/6.ogg", "legacy": null }
    }"#;

    #[test]
    fn test_parse_pokemon() {
        let record = parse_pokemon(CHARIZARD).unwrap();

        assert_eq!(record.name, "charizard");
        assert_eq!(record.id, Some(6));
        assert_eq!(record.stats.len(), 6);
        assert_eq!(
            record.sprites.front_default.as_deref(),
            Some("https://example.test/6.png")
        );
        assert_eq!(record.cries.latest.as_deref(), Some("https://example.test/6.ogg"));
        assert_eq!(record.cries.legacy, None);
    }

    #[test]
    fn test_type_names_ordered_by_slot() {
        let record = parse_pokemon(CHARIZARD).unwrap();

        assert_eq!(record.type_names(), vec!["fire", "flying"]);
    }

    #[test]
    fn test_stat_pairs_keep_response_order() {
        let record = parse_pokemon(CHARIZARD).unwrap();
        let pairs: Vec<_> = record.stat_pairs().collect();

        assert_eq!(pairs[0], ("hp", 78));
        assert_eq!(pairs[3], ("special-attack", 109));
        assert_eq!(pairs.iter().map(|(_, v)| v).sum::<u32>(), 534);
    }

    #[test]
    fn test_parse_minimal_record() {
        let record = parse_pokemon(r#"{"name":"missingno"}"#).unwrap();

        assert!(record.types.is_empty());
        assert!(record.stats.is_empty());
        assert_eq!(record.sprites.front_default, None);
    }

    #[test]
    fn test_parse_empty_body() {
        assert_eq!(parse_pokemon("  \n"), Err(ParseError::EmptyBody));
    }

    #[test]
    fn test_parse_not_found_body() {
        // PokeAPI answers unknown names with a plain-text 404 body
        let result = parse_pokemon("Not Found");

        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_missing_name() {
        let result = parse_pokemon(r#"{"name":"","stats":[]}"#);

        assert_eq!(result, Err(ParseError::MissingField("name".to_string())));
    }
}
