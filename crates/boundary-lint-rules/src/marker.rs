//! Marker extraction from raw module text.
//!
//! Markers live in the leading trivia of a module, so extraction works on
//! the raw text and never needs the full syntax tree. Extraction never
//! fails: a malformed or missing marker is a representable outcome
//! (`None`), not an error.

/// Attribute-dialect marker: a sole top-level string-literal
/// expression statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeMarker {
    /// `'use server'`
    UseServer,
    /// `'use client'`
    UseClient,
    /// `'use agnostic'`
    UseAgnostic,
}

impl AttributeMarker {
    /// The literal marker text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UseServer => "use server",
            Self::UseClient => "use client",
            Self::UseAgnostic => "use agnostic",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "use server" => Some(Self::UseServer),
            "use client" => Some(Self::UseClient),
            "use agnostic" => Some(Self::UseAgnostic),
            _ => None,
        }
    }
}

/// Directive-dialect marker: the very first comment in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveMarker {
    /// `// 'use server logics'`
    ServerLogics,
    /// `// 'use server components'`
    ServerComponents,
    /// `// 'use server functions'`
    ServerFunctions,
    /// `// 'use client logics'`
    ClientLogics,
    /// `// 'use client components'`
    ClientComponents,
    /// `// 'use client contexts'`
    ClientContexts,
    /// `// 'use agnostic logics'`
    AgnosticLogics,
    /// `// 'use agnostic components'`
    AgnosticComponents,
    /// `// 'use agnostic conditions'`
    AgnosticConditions,
    /// `// 'use agnostic strategies'`
    AgnosticStrategies,
}

impl DirectiveMarker {
    /// The marker text without quotes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ServerLogics => "use server logics",
            Self::ServerComponents => "use server components",
            Self::ServerFunctions => "use server functions",
            Self::ClientLogics => "use client logics",
            Self::ClientComponents => "use client components",
            Self::ClientContexts => "use client contexts",
            Self::AgnosticLogics => "use agnostic logics",
            Self::AgnosticComponents => "use agnostic components",
            Self::AgnosticConditions => "use agnostic conditions",
            Self::AgnosticStrategies => "use agnostic strategies",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "use server logics" => Some(Self::ServerLogics),
            "use server components" => Some(Self::ServerComponents),
            "use server functions" => Some(Self::ServerFunctions),
            "use client logics" => Some(Self::ClientLogics),
            "use client components" => Some(Self::ClientComponents),
            "use client contexts" => Some(Self::ClientContexts),
            "use agnostic logics" => Some(Self::AgnosticLogics),
            "use agnostic components" => Some(Self::AgnosticComponents),
            "use agnostic conditions" => Some(Self::AgnosticConditions),
            "use agnostic strategies" => Some(Self::AgnosticStrategies),
            _ => None,
        }
    }
}

/// Extracts the attribute-dialect marker, if any.
///
/// The first top-level statement must be a bare string literal whose value
/// exactly matches one of the known markers. Leading comments and
/// whitespace are skipped; anything else means no marker.
#[must_use]
pub fn extract_attribute_marker(text: &str) -> Option<AttributeMarker> {
    let rest = skip_leading_trivia(text);
    let (value, rest) = read_string_literal(rest)?;
    if !statement_ends(rest) {
        return None;
    }
    AttributeMarker::parse(value)
}

/// Extracts the directive-dialect marker, if any.
///
/// The first comment must start at line 1, column 0. Its trimmed body must
/// be exactly one known marker wrapped in single or double quotes; line and
/// block comments are both accepted (four shapes total).
#[must_use]
pub fn extract_directive_marker(text: &str) -> Option<DirectiveMarker> {
    let body = if let Some(rest) = text.strip_prefix("//") {
        rest.lines().next().unwrap_or("")
    } else if let Some(rest) = text.strip_prefix("/*") {
        let end = rest.find("*/")?;
        &rest[..end]
    } else {
        return None;
    };

    let quoted = body.trim();
    let value = unquote(quoted)?;
    DirectiveMarker::parse(value)
}

/// Strips matching single or double quotes.
fn unquote(text: &str) -> Option<&str> {
    let inner = text
        .strip_prefix('\'')
        .and_then(|t| t.strip_suffix('\''))
        .or_else(|| text.strip_prefix('"').and_then(|t| t.strip_suffix('"')))?;
    // Reject e.g. `'a' + 'b'` where both strips succeed on different quotes
    if inner.contains('\'') || inner.contains('"') {
        return None;
    }
    Some(inner)
}

/// Skips whitespace and comments at the start of the text.
fn skip_leading_trivia(mut text: &str) -> &str {
    loop {
        let trimmed = text.trim_start();
        if let Some(rest) = trimmed.strip_prefix("//") {
            text = rest.split_once('\n').map_or("", |(_, after)| after);
        } else if let Some(rest) = trimmed.strip_prefix("/*") {
            match rest.find("*/") {
                Some(end) => text = &rest[end + 2..],
                None => return "",
            }
        } else {
            return trimmed;
        }
    }
}

/// Reads a string literal at the start of the text.
///
/// Returns the literal value and the remaining text. Literals containing
/// escapes are rejected; no marker contains one.
fn read_string_literal(text: &str) -> Option<(&str, &str)> {
    let quote = match text.as_bytes().first() {
        Some(b'\'') => '\'',
        Some(b'"') => '"',
        _ => return None,
    };
    let inner = &text[1..];
    let end = inner.find(quote)?;
    let value = &inner[..end];
    if value.contains('\\') || value.contains('\n') {
        return None;
    }
    Some((value, &inner[end + 1..]))
}

/// True if the text after a string literal terminates the statement.
fn statement_ends(rest: &str) -> bool {
    let rest = rest.trim_start_matches([' ', '\t']);
    matches!(rest.as_bytes().first(), None | Some(b';' | b'\n' | b'\r'))
}
