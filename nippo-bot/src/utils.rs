/// Discord's per-message character ceiling.
pub const DISCORD_MAX_LENGTH: usize = 2000;

pub(crate) fn report_banner(target_date: &str) -> String {
    format!(
        "━━━━━━━━━━━━━━━━━━━━━━━━\n📅 **{target_date} 業務日報**\n━━━━━━━━━━━━━━━━━━━━━━━━\n\n"
    )
}

/// Splits `text` into fixed-length slices of at most [`DISCORD_MAX_LENGTH`]
/// characters. Boundaries are plain character counts, not sentence-aware;
/// concatenating the segments in order reconstructs the input exactly.
pub fn split_discord_message(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(DISCORD_MAX_LENGTH)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Prefixes the date banner once and splits the whole document into
/// sendable segments.
pub fn compose_report(target_date: &str, report: &str) -> Vec<String> {
    let mut document = report_banner(target_date);
    document.push_str(report);
    split_discord_message(&document)
}
