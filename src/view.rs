//! Read-only snapshot of the game plus the HTML the page is built from.
//!
//! Markup is produced as strings so it can be checked natively; `dom` only
//! copies it into the document.

use crate::catalog::Item;
use crate::game::{GameState, Mode};

/// Everything the page shows, captured at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameView {
    pub mode: Mode,
    pub score: u32,
    pub streak: u32,
    pub history: Vec<&'static str>,
    /// Configured size of the recent-answers log, used in its label.
    pub history_len: usize,
    pub round: Option<RoundView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundView {
    /// `None` when the answer is hidden until guessed.
    pub name: Option<&'static str>,
    pub image_ref: &'static str,
    pub facts: &'static [&'static str],
    pub tries_remaining: u8,
    pub wrong_guesses: Vec<String>,
}

impl GameView {
    pub fn capture(state: &GameState) -> Self {
        let reveal = state.config().reveal_answer;
        Self {
            mode: state.mode(),
            score: state.score(),
            streak: state.streak(),
            history: state.history().collect(),
            history_len: state.config().history_len,
            round: state.round().map(|r| RoundView {
                name: reveal.then_some(r.target.name),
                image_ref: r.target.image_ref,
                facts: r.target.facts,
                tries_remaining: r.tries_remaining,
                wrong_guesses: r.wrong_guesses.clone(),
            }),
        }
    }
}

/// Label of the button that switches to the other mode.
pub fn mode_button_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Easy => "Hard Mode",
        Mode::Hard => "Easy Mode",
    }
}

/// Info panel: the clue plus counters. Empty before the first round.
pub fn render_info(view: &GameView) -> String {
    let Some(round) = &view.round else {
        return String::new();
    };
    let mut html = String::from("<div class=\"cheese-info\">");
    let alt = match round.name {
        Some(name) => {
            html.push_str(&format!("<h2>{}</h2>", escape_html(name)));
            escape_html(name)
        }
        None => "Mystery cheese".to_string(),
    };
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" />",
        escape_html(round.image_ref),
        alt
    ));
    html.push_str("<ul>");
    for fact in round.facts {
        html.push_str(&format!("<li>{}</li>", escape_html(fact)));
    }
    html.push_str("</ul>");
    html.push_str(&format!("<p>Remaining Tries: {}</p>", round.tries_remaining));
    html.push_str(&format!(
        "<p>Guessed Cheeses: {}</p>",
        join_or_none(round.wrong_guesses.iter().map(String::as_str))
    ));
    html.push_str(&format!("<p>Score: {}</p>", view.score));
    html.push_str(&format!("<p>Streak: {}</p>", view.streak));
    html.push_str(&format!(
        "<p>Last {} Cheeses: {}</p>",
        view.history_len,
        join_or_none(view.history.iter().copied())
    ));
    html.push_str("</div>");
    html
}

/// Guess affordance: a button per catalog item in easy mode (only while a
/// round is running), a free-text form in hard mode.
pub fn render_input(view: &GameView, catalog: &[Item]) -> String {
    match view.mode {
        Mode::Easy => {
            if view.round.is_none() {
                return String::new();
            }
            let mut html = String::from("<div class=\"guess-buttons\">");
            for item in catalog {
                let name = escape_html(item.name);
                html.push_str(&format!(
                    "<button type=\"button\" data-guess=\"{name}\">{name}</button>"
                ));
            }
            html.push_str("</div>");
            html
        }
        Mode::Hard => concat!(
            "<form id=\"gmc-guess-form\">",
            "<label for=\"guess-input\">Guess the Cheese:</label>",
            "<input id=\"guess-input\" type=\"text\" autocomplete=\"off\" />",
            "<button type=\"submit\">Guess</button>",
            "</form>"
        )
        .to_string(),
    }
}

fn join_or_none<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined = items.map(escape_html).collect::<Vec<_>>().join(", ");
    if joined.is_empty() { "None".to_string() } else { joined }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
