// Grammar for the free-text part of `!logar`:
//
//   <main segment> [Observacao: <note text>]
//
// The note marker is split off first, so everything after it is note text.
// Only the main segment is tokenized on whitespace for `key:value` pairs.
// Keys and the marker are matched ASCII case-insensitively, and a repeated
// key overwrites the earlier value. Unknown tokens are ignored.

use super::performance_models::ParsedLog;
use super::performance_service::PerformanceLogError;

pub const NOTE_MARKER: &str = "observacao:";
pub const SCORE_KEY: &str = "pontuacao:";
pub const ERRORS_KEY: &str = "erros:";

pub const USAGE_EXAMPLE: &str = "!logar @Jogador pontuacao:9 erros:2 Observacao:Jogou muito bem!";

/// Parse the arguments that follow the member mention.
pub fn parse_log_args(args: &str) -> Result<ParsedLog, PerformanceLogError> {
    let (main_segment, note) = split_note(args);

    let mut parsed = ParsedLog {
        note: note.to_string(),
        ..ParsedLog::default()
    };

    for token in main_segment.split_whitespace() {
        if let Some(value) = strip_key(token, SCORE_KEY) {
            let score = value.parse::<i64>().map_err(|_| {
                PerformanceLogError::InvalidScore(
                    "Pontuação inválida. Use um número inteiro (ex: pontuacao:9).".to_string(),
                )
            })?;
            parsed.score = Some(score);
        } else if let Some(value) = strip_key(token, ERRORS_KEY) {
            let errors = value.parse::<i64>().map_err(|_| {
                PerformanceLogError::InvalidErrors(
                    "Número de erros inválido. Use um número inteiro (ex: erros:2).".to_string(),
                )
            })?;
            parsed.errors = Some(errors);
        }
    }

    if parsed.is_empty() {
        return Err(PerformanceLogError::MissingFields(format!(
            "Uso incorreto. Exemplo: `{}`",
            USAGE_EXAMPLE
        )));
    }

    Ok(parsed)
}

/// Split at the first note marker. Returns `(main segment, trimmed note)`.
fn split_note(args: &str) -> (&str, &str) {
    // ASCII lowercasing keeps byte offsets, so the index is valid in `args`.
    match args.to_ascii_lowercase().find(NOTE_MARKER) {
        Some(idx) => (&args[..idx], args[idx + NOTE_MARKER.len()..].trim()),
        None => (args, ""),
    }
}

fn strip_key<'a>(token: &'a str, key: &str) -> Option<&'a str> {
    let head = token.get(..key.len())?;
    if head.eq_ignore_ascii_case(key) {
        Some(&token[key.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_then_note() {
        let parsed = parse_log_args("pontuacao:9 Observacao:Jogou muito bem!").unwrap();
        assert_eq!(parsed.score, Some(9));
        assert_eq!(parsed.errors, None);
        assert_eq!(parsed.note, "Jogou muito bem!");
    }

    #[test]
    fn test_note_swallows_everything_after_marker() {
        let parsed = parse_log_args("Observacao:Jogou muito bem! pontuacao:9").unwrap();
        assert_eq!(parsed.score, None);
        assert_eq!(parsed.note, "Jogou muito bem! pontuacao:9");
    }

    #[test]
    fn test_all_fields() {
        let parsed = parse_log_args("pontuacao:7 erros:2 Observacao:  Boa partida  ").unwrap();
        assert_eq!(parsed.score, Some(7));
        assert_eq!(parsed.errors, Some(2));
        assert_eq!(parsed.note, "Boa partida");
    }

    #[test]
    fn test_invalid_score() {
        let err = parse_log_args("pontuacao:abc").unwrap_err();
        assert!(matches!(err, PerformanceLogError::InvalidScore(_)));
    }

    #[test]
    fn test_invalid_score_stops_before_later_tokens() {
        // The bad score is reported even though a later token would be valid.
        let err = parse_log_args("pontuacao:x erros:zz").unwrap_err();
        assert!(matches!(err, PerformanceLogError::InvalidScore(_)));
    }

    #[test]
    fn test_empty_score_value_is_invalid() {
        let err = parse_log_args("pontuacao:").unwrap_err();
        assert!(matches!(err, PerformanceLogError::InvalidScore(_)));
    }

    #[test]
    fn test_invalid_errors() {
        let err = parse_log_args("pontuacao:3 erros:dois").unwrap_err();
        assert!(matches!(err, PerformanceLogError::InvalidErrors(_)));
    }

    #[test]
    fn test_empty_input_is_missing_fields() {
        let err = parse_log_args("").unwrap_err();
        match err {
            PerformanceLogError::MissingFields(msg) => assert!(msg.contains(USAGE_EXAMPLE)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_only_unknown_tokens_is_missing_fields() {
        let err = parse_log_args("jogou bem hoje").unwrap_err();
        assert!(matches!(err, PerformanceLogError::MissingFields(_)));
    }

    #[test]
    fn test_empty_note_after_marker_is_missing_fields() {
        let err = parse_log_args("Observacao:   ").unwrap_err();
        assert!(matches!(err, PerformanceLogError::MissingFields(_)));
    }

    #[test]
    fn test_last_score_wins() {
        let parsed = parse_log_args("pontuacao:3 pontuacao:8").unwrap();
        assert_eq!(parsed.score, Some(8));
    }

    #[test]
    fn test_keys_and_marker_are_case_insensitive() {
        let parsed = parse_log_args("PONTUACAO:5 Erros:1 OBSERVACAO:ok").unwrap();
        assert_eq!(parsed.score, Some(5));
        assert_eq!(parsed.errors, Some(1));
        assert_eq!(parsed.note, "ok");
    }

    #[test]
    fn test_negative_score() {
        let parsed = parse_log_args("pontuacao:-2").unwrap();
        assert_eq!(parsed.score, Some(-2));
    }

    #[test]
    fn test_non_ascii_text_before_marker() {
        let parsed = parse_log_args("ótimo pontuacao:10 Observacao:Ação rápida").unwrap();
        assert_eq!(parsed.score, Some(10));
        assert_eq!(parsed.note, "Ação rápida");
    }
}
