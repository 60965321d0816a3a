use crate::core::performance::{DeleteOutcome, PerformanceLogEntry};
use poise::serenity_prelude::{self as serenity, CreateEmbed, CreateEmbedFooter};

// Discord field values max out at 1024 characters.
const MAX_NOTE_CHARS: usize = 1000;
// Discord rejects embeds whose title, description, fields and footer
// add up to more than 6000 characters.
pub const MAX_EMBED_CHARS: usize = 6000;
// Everything in a listing field except the note text, worst case:
// the zero-width field name, labels, 19-digit id/score/errors, `...`.
const ENTRY_OVERHEAD_CHARS: usize = 150;
const LISTING_FIELD_NAME: &str = "\u{200b}";

/// Cut `text` to `max_chars` characters, marking the cut with `...`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

/// Field body for one entry in a `!ver_logs` listing, with the note cut to
/// `max_note_chars`.
pub fn format_entry_summary(entry: &PerformanceLogEntry, max_note_chars: usize) -> String {
    let mut text = format!(
        "**ID:** {}\n**Data:** {}\n",
        entry.id,
        entry.formatted_date()
    );
    if let Some(score) = entry.score {
        text.push_str(&format!("**Pontuação:** {}\n", score));
    }
    if let Some(errors) = entry.errors {
        text.push_str(&format!("**Erros:** {}\n", errors));
    }
    if let Some(note) = &entry.note {
        text.push_str(&format!("**Obs:** {}\n", truncate_chars(note, max_note_chars)));
    }
    text.push_str("---");
    text
}

pub fn recorded_log_embed(entry: &PerformanceLogEntry, author_name: &str) -> CreateEmbed {
    let mut embed = CreateEmbed::default()
        .title("Log de Desempenho Registrado!")
        .color(serenity::Color::BLUE)
        .field("ID", entry.id.to_string(), true)
        .field("Jogador", &entry.username, true)
        .field("Data", entry.formatted_date(), true);

    if let Some(score) = entry.score {
        embed = embed.field("Pontuação", score.to_string(), true);
    }
    if let Some(errors) = entry.errors {
        embed = embed.field("Erros Básicos", errors.to_string(), true);
    }
    if let Some(note) = &entry.note {
        embed = embed.field("Observação", truncate_chars(note, MAX_NOTE_CHARS), false);
    }

    embed.footer(CreateEmbedFooter::new(format!(
        "Registrado por: {}",
        author_name
    )))
}

/// Field bodies for a listing that together stay within `budget` characters.
///
/// Notes are shortened to an equal share of the budget. Entries that still
/// would not fit (only possible with a tiny budget) are left out.
pub fn listing_field_values(entries: &[PerformanceLogEntry], budget: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let per_entry = budget / entries.len();
    let max_note_chars = per_entry
        .saturating_sub(ENTRY_OVERHEAD_CHARS)
        .min(MAX_NOTE_CHARS - ENTRY_OVERHEAD_CHARS);

    let mut used = 0;
    let mut values = Vec::with_capacity(entries.len());
    for entry in entries {
        let value = format_entry_summary(entry, max_note_chars);
        let cost = LISTING_FIELD_NAME.chars().count() + value.chars().count();
        if used + cost > budget {
            break;
        }
        used += cost;
        values.push(value);
    }
    values
}

pub fn log_listing_embed(
    username: &str,
    entries: &[PerformanceLogEntry],
    author_name: &str,
) -> CreateEmbed {
    let title = format!("Logs de Desempenho para {}", username);
    let description = format!("Exibindo os últimos {} registros:", entries.len());
    let footer = format!("Solicitado por: {}", author_name);

    let header_chars = title.chars().count() + description.chars().count() + footer.chars().count();
    let values = listing_field_values(entries, MAX_EMBED_CHARS.saturating_sub(header_chars));

    let embed = CreateEmbed::default()
        .title(title)
        .description(description)
        .color(serenity::Color::GOLD);

    values
        .into_iter()
        .fold(embed, |embed, value| {
            embed.field(LISTING_FIELD_NAME, value, false)
        })
        .footer(CreateEmbedFooter::new(footer))
}

pub fn no_logs_message(username: &str) -> String {
    format!("Nenhum log de desempenho encontrado para {}.", username)
}

pub fn delete_outcome_message(id: i64, outcome: DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::Deleted => format!("✅ Log #{} apagado com sucesso.", id),
        DeleteOutcome::NotFound => format!("Nenhum log encontrado com o ID {}.", id),
    }
}
