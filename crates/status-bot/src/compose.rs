//! Status note text.

use flat_store::ServiceStatus;
use nostr_relay::RelayMessage;

/// Note content used in the prompt when no previous note was found.
pub const PLACEHOLDER_NOTE: &str = "Error fetching event";

/// Prompt sent to the API. Doubles as the availability probe.
pub fn build_prompt(note_content: &str) -> String {
    format!(
        "Here's a nostr note someone made: '{note_content}'. Add a witty comment about how \
         Bitcoin relates to it. Keep it short and concise, within 2 sentences. No hashtags. "
    )
}

/// Fixed status line naming the provider.
pub fn status_line(status: ServiceStatus, provider_url: &str) -> String {
    match status {
        ServiceStatus::Up => format!(
            "✅ Routstr is routing! Your Freedom AI Tech is routing requests as usual. \nProvider: `{provider_url}` \n"
        ),
        ServiceStatus::Down => format!(
            "🔴 Routstr is NOT routing! Fear not, we have other providers. \nProvider: `{provider_url}` \n"
        ),
    }
}

/// Full note body: optional commentary, the status line, and a `nostr:`
/// reference to the quoted note when there is one.
pub fn compose_content(
    commentary: Option<&str>,
    status: ServiceStatus,
    provider_url: &str,
    quoted: Option<&RelayMessage>,
) -> String {
    let line = status_line(status, provider_url);
    let mut content = match commentary.filter(|c| !c.trim().is_empty()) {
        Some(commentary) => format!("{commentary}\n\n{line}"),
        None => line,
    };

    if let Some(uri) = quoted.and_then(RelayMessage::nostr_uri) {
        content.push_str(&uri);
    }

    content
}
