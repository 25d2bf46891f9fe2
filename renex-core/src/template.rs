//! Name templates with `<group>` placeholders.
//!
//! A placeholder names a capture group and may carry a `#` on either side to
//! request the separator there:
//!
//! - `<g>` → `value`
//! - `<#g>` → `separator + value`
//! - `<g#>` → `value + separator`
//! - `<#g#>` → `separator + value + separator`
//!
//! When a group's (trimmed) value is empty, no separator is emitted for that
//! group. A separator that only faces empty groups up to the end of the
//! template is dropped as well, so optional captures don't leave dangling
//! separators behind.

use crate::pattern::GroupValues;

/// The outcome of resolving a template against one set of captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    /// The new filename.
    pub name: String,
    /// The same name with every substitution wrapped as `<group>text</>`.
    /// Diagnostic only.
    pub annotated: String,
}

/// Turns captured group values into a new filename.
#[derive(Debug, Clone, Default)]
pub struct TemplateResolver {
    template: String,
    separator: String,
    trim_prefix: String,
    trim_suffix: String,
}

/// A parsed `<#name#>` token.
struct Placeholder<'t> {
    name: &'t str,
    leading: bool,
    trailing: bool,
}

impl<'t> Placeholder<'t> {
    /// Parse the text between `<` and `>`.
    fn parse(inner: &'t str) -> Option<Self> {
        let (leading, rest) = match inner.strip_prefix('#') {
            Some(rest) => (true, rest),
            None => (false, inner),
        };
        let (trailing, name) = match rest.strip_suffix('#') {
            Some(name) => (true, name),
            None => (false, rest),
        };
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name,
            leading,
            trailing,
        })
    }
}

impl TemplateResolver {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Default::default()
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_trim_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.trim_prefix = prefix.into();
        self
    }

    pub fn with_trim_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.trim_suffix = suffix.into();
        self
    }

    /// Strip the configured prefix and suffix (once each) from a captured value.
    pub fn trim<'v>(&self, value: &'v str) -> &'v str {
        let value = value.strip_prefix(self.trim_prefix.as_str()).unwrap_or(value);
        value.strip_suffix(self.trim_suffix.as_str()).unwrap_or(value)
    }

    /// Substitute `groups` into the template.
    ///
    /// The template is scanned once from left to right; substituted text is
    /// never scanned again. Placeholders naming a group the pattern doesn't
    /// have are copied through untouched.
    pub fn resolve(&self, groups: &GroupValues) -> ResolvedName {
        let segments = self.segments(groups);

        let mut name = String::with_capacity(self.template.len());
        let mut annotated = String::with_capacity(self.template.len());
        for (i, segment) in segments.iter().enumerate() {
            match segment {
                Segment::Literal(text) => {
                    name.push_str(text);
                    annotated.push_str(text);
                }
                Segment::Slot { placeholder, value } => {
                    let lead = placeholder.leading && separator_wanted(value, &segments[..i]);
                    let trail =
                        placeholder.trailing && separator_wanted(value, &segments[i + 1..]);

                    let mut fill = String::with_capacity(value.len() + 2 * self.separator.len());
                    if lead {
                        fill.push_str(&self.separator);
                    }
                    fill.push_str(value);
                    if trail {
                        fill.push_str(&self.separator);
                    }

                    name.push_str(&fill);
                    annotated.push('<');
                    annotated.push_str(placeholder.name);
                    annotated.push('>');
                    annotated.push_str(&fill);
                    annotated.push_str("</>");
                }
            }
        }

        ResolvedName { name, annotated }
    }

    /// Split the template into literal text and resolved group slots.
    fn segments<'t>(&'t self, groups: &'t GroupValues) -> Vec<Segment<'t>> {
        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut cursor = 0;
        let template = self.template.as_str();

        while let Some(offset) = template[cursor..].find('<') {
            let open = cursor + offset;
            let after = &template[open + 1..];

            let hit = after.find('>').and_then(|close| {
                let placeholder = Placeholder::parse(&after[..close])?;
                let value = groups.get(placeholder.name)?;
                Some((placeholder, value.as_str(), close))
            });

            match hit {
                Some((placeholder, value, close)) => {
                    if literal_start < open {
                        segments.push(Segment::Literal(&template[literal_start..open]));
                    }
                    segments.push(Segment::Slot {
                        placeholder,
                        value: self.trim(value),
                    });
                    cursor = open + 1 + close + 1;
                    literal_start = cursor;
                }
                None => cursor = open + 1,
            }
        }
        if literal_start < template.len() {
            segments.push(Segment::Literal(&template[literal_start..]));
        }
        segments
    }
}

/// A piece of a template after placeholder lookup.
enum Segment<'t> {
    Literal(&'t str),
    Slot {
        placeholder: Placeholder<'t>,
        value: &'t str,
    },
}

impl Segment<'_> {
    fn is_empty_slot(&self) -> bool {
        matches!(self, Segment::Slot { value, .. } if value.is_empty())
    }
}

/// Whether a `#` separator should be emitted for `value` on the side whose
/// neighbouring segments are `side`.
///
/// Empty values never get a separator. A separator is also dropped when the
/// only things between it and that edge of the template are empty groups, so
/// a missing trailing capture doesn't leave the previous group's separator
/// dangling.
fn separator_wanted(value: &str, side: &[Segment<'_>]) -> bool {
    if value.is_empty() {
        return false;
    }
    side.is_empty() || !side.iter().all(Segment::is_empty_slot)
}

/// Render a group map as `{name: "value", ...}` for verbose output.
pub fn describe_groups(groups: &GroupValues) -> String {
    let parts: Vec<String> = groups
        .iter()
        .map(|(name, value)| format!("{name}: {value:?}"))
        .collect();
    format!("{{{}}}", parts.join(", "))
}

#[cfg(test)]
#[path = "tests/template_tests.rs"]
mod tests;
