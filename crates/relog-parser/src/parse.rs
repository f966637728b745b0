//! Conventional-commit classification.

use std::sync::LazyLock;

use regex::Regex;
use relog_commit::{Author, ParsedCommit, RawCommit, Reference};

// https://www.conventionalcommits.org/en/v1.0.0/
//
// The optional leading token is either a `:shortcode:` or a literal emoji
// glyph in the Misc Symbols / Emoticons / Transport ranges. The emoji alone
// never makes a subject conventional; a `type: description` tail is still
// required.
static CONVENTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?P<emoji>:.+:|[\x{1F300}-\x{1F3FF}]|[\x{1F400}-\x{1F64F}]|[\x{1F680}-\x{1F6FF}]|[\x{2600}-\x{2B55}])? *(?P<type>[a-z]+)(?:\((?P<scope>.+)\))?(?P<breaking>!)?: (?P<description>.+)",
    )
    .expect("invalid regex")
});

static CO_AUTHORED_BY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)co-authored-by:\s*(?P<name>.+)<(?P<email>.+)>").expect("invalid regex")
});

// Lowercase only: `(Fixes #1)` is left alone.
static PULL_REQUEST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([ a-z]*(#\d+)\s*\)").expect("invalid regex"));

static ISSUE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\d+").expect("invalid regex"));

static BREAKING_BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)breaking[ -]changes?:").expect("invalid regex"));

/// Classifies a raw commit against the Conventional Commits grammar.
///
/// Produces the commit type, scope, breaking flag, issue/pull-request
/// references, and the author list (primary author first, then co-authors
/// credited in the body). Classification is total: a subject that does not
/// match the grammar yields `is_conventional` false with the full subject
/// as description, never an error.
#[must_use]
pub fn parse(raw: &RawCommit) -> ParsedCommit {
    let captures = CONVENTIONAL_RE.captures(&raw.message);
    let is_conventional = captures.is_some();

    let group = |name: &str| {
        captures
            .as_ref()
            .and_then(|caps| caps.name(name))
            .map(|m| m.as_str())
    };

    let r#type = group("type").unwrap_or_default().to_string();
    let scope = group("scope").unwrap_or_default().to_string();
    let description = group("description").unwrap_or(&raw.message);

    let is_breaking = group("breaking").is_some() || BREAKING_BODY_RE.is_match(&raw.body);

    // Pull-request markers first; the issue pass skips any literal value
    // already collected, so `(#1)` never shows up a second time as an
    // issue.
    let mut references = Vec::new();
    for caps in PULL_REQUEST_RE.captures_iter(description) {
        let value = caps.get(1).map_or("", |m| m.as_str());
        references.push(Reference::pull_request(value));
    }
    for found in ISSUE_RE.find_iter(description) {
        if !references.iter().any(|r| r.value == found.as_str()) {
            references.push(Reference::issue(found.as_str()));
        }
    }

    // Parenthesized pull-request markers are stripped from the
    // description; bare issue markers stay in place.
    let description = PULL_REQUEST_RE
        .replace_all(description, "")
        .trim()
        .to_string();

    let mut authors = vec![raw.author.clone()];
    for caps in CO_AUTHORED_BY_RE.captures_iter(&raw.body) {
        let name = caps.name("name").map_or("", |m| m.as_str());
        let email = caps.name("email").map_or("", |m| m.as_str());
        authors.push(Author::new(name.trim(), email.trim()));
    }

    ParsedCommit {
        short_hash: raw.short_hash.clone(),
        message: raw.message.clone(),
        body: raw.body.clone(),
        date: raw.date.clone(),
        is_conventional,
        r#type,
        scope,
        description,
        is_breaking,
        references,
        authors,
    }
}
