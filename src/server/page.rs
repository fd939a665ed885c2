//! Server-rendered standings page.
//!
//! Sort and theme live in the query string, so every view is a plain link.

use std::fmt::Write as _;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
};
use tracing::error;
use url::Url;

use super::ServerState;
use crate::data::country::{country_name, flag};
use crate::data::{decode_medals, ranked, Location, MedalEntryWithTotal, SortKey};
use crate::ui::ThemeMode;

const THEME_PARAM: &str = "theme";

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; }
body.light { background: #f3f4f6; color: #1f2937; }
body.dark { background: #111827; color: #e5e7eb; }
main { max-width: 64rem; margin: 0 auto; padding: 1.25rem; }
header { text-align: center; position: relative; margin-bottom: 2rem; }
header h1 { font-size: 3rem; margin: 0.5rem 0; }
.rings span { display: inline-block; width: 1.5rem; height: 1.5rem; border: 3px solid; border-radius: 50%; margin: 0 0.15rem; }
.toggle { position: absolute; top: 0; right: 0; text-decoration: none; }
table { width: 100%; border-collapse: collapse; border-radius: 1rem; overflow: hidden; }
body.light table { background: #ffffff; }
body.dark table { background: #1f2937; }
th { padding: 1rem 0.6rem; text-transform: uppercase; font-size: 0.85rem; text-align: center; background: #2563eb; color: #ffffff; }
th a { color: inherit; text-decoration: none; }
th.active { background: #1e40af; }
td { padding: 1rem 0.6rem; text-align: center; border-bottom: 1px solid rgba(127, 127, 127, 0.2); }
td.country { text-align: left; }
td.country small { display: block; opacity: 0.7; }
td.gold { color: #b8860b; font-weight: bold; }
td.silver { color: #808080; font-weight: bold; }
td.bronze { color: #a0522d; font-weight: bold; }
td.total { font-weight: 800; font-size: 1.1rem; }
.error { max-width: 28rem; margin: 5rem auto; text-align: center; }
.error a { display: inline-block; margin-top: 1rem; padding: 0.75rem 1.5rem; border-radius: 0.5rem; background: #2563eb; color: #ffffff; text-decoration: none; }
"#;

const RING_COLORS: [&str; 5] = ["#00BFFF", "#FFD700", "#808080", "#32CD32", "#FF1744"];

/// GET /?sort=&theme=
pub async fn standings(State(state): State<ServerState>, uri: Uri) -> (StatusCode, Html<String>) {
    let location = request_location(&uri);
    let theme = location
        .param(THEME_PARAM)
        .and_then(|t| t.parse().ok())
        .unwrap_or_default();
    let key = location.sort_key();

    let loaded = match state.store.read().await {
        Ok(content) => decode_medals(&content).map_err(|e| e.user_message()),
        Err(e) => Err(format!("Failed to fetch medal data: {}", e)),
    };

    match loaded {
        Ok(medals) => {
            let body = render_table(&medals, key, &location);
            (StatusCode::OK, Html(render_page(theme, &location, &body)))
        }
        Err(message) => {
            error!(error = %message, "standings page failed to load medal data");
            let body = render_error(&message, &location);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_page(theme, &location, &body)),
            )
        }
    }
}

fn request_location(uri: &Uri) -> Location {
    // Only path and query matter for links, so any fixed origin works
    let base = Url::parse("http://localhost/").expect("static base URL is valid");
    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    Location::parse(path, &base).unwrap_or_else(|_| Location::new(base))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn render_page(theme: ThemeMode, location: &Location, body: &str) -> String {
    let toggle = location.with_param(THEME_PARAM, Some(theme.toggled().as_str()));
    let rings: String = RING_COLORS
        .iter()
        .map(|color| format!(r#"<span style="border-color: {}"></span>"#, color))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Medal Count</title>
<style>{style}</style>
</head>
<body class="{theme}">
<main>
<header>
<a class="toggle" href="{toggle}" aria-label="Toggle dark mode">{icon}</a>
<h1>Medal Count</h1>
<div class="rings">{rings}</div>
<p>Olympic Medal Standings</p>
</header>
{body}
</main>
</body>
</html>
"#,
        style = STYLE,
        theme = theme.as_str(),
        toggle = escape(toggle.relative()),
        icon = theme.icon(),
        rings = rings,
        body = body,
    )
}

fn render_table(medals: &[MedalEntryWithTotal], key: SortKey, location: &Location) -> String {
    let mut html = String::from("<table>\n<thead><tr><th>Rank</th><th>Country</th>");

    for column in SortKey::ALL {
        let active = column == key;
        let _ = write!(
            html,
            r#"<th class="{class}"><a href="{href}">{label}{arrow}</a></th>"#,
            class = if active { "sortable active" } else { "sortable" },
            href = escape(location.with_sort(column).relative()),
            label = column.label(),
            arrow = if active { " ↓" } else { "" },
        );
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for (rank, entry) in ranked(medals, key) {
        let _ = writeln!(
            html,
            r#"<tr><td class="rank">{rank}</td><td class="country">{flag} {code}<small>{name}</small></td><td class="gold">{gold}</td><td class="silver">{silver}</td><td class="bronze">{bronze}</td><td class="total">{total}</td></tr>"#,
            rank = rank,
            flag = escape(&flag(entry.code())),
            code = escape(entry.code()),
            name = escape(country_name(entry.code())),
            gold = entry.gold(),
            silver = entry.silver(),
            bronze = entry.bronze(),
            total = entry.total(),
        );
    }

    html.push_str("</tbody>\n</table>");
    html
}

fn render_error(message: &str, location: &Location) -> String {
    format!(
        r#"<div class="error">
<h3>Failed to Load Medal Data</h3>
<p>{message}</p>
<a href="{retry}">Try Again</a>
</div>"#,
        message = escape(message),
        retry = escape(location.relative()),
    )
}
