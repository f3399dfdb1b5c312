//! AI auto-generated field selection
//!
//! Admins can limit which photo text fields are auto-generated by
//! setting `AI_TEXT_AUTO_GENERATED_FIELDS` to a comma-separated list.
//! The sentinel `all` expands to every supported field and `none`
//! clears the selection.

use serde::Serialize;

/// Photo text fields that can be auto-generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AiAutoGeneratedField {
    Title,
    Caption,
    Tags,
    Semantic,
}

impl AiAutoGeneratedField {
    /// All supported fields, in canonical order.
    pub const ALL: [Self; 4] = [Self::Title, Self::Caption, Self::Tags, Self::Semantic];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Caption => "caption",
            Self::Tags => "tags",
            Self::Semantic => "semantic",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "title" => Some(Self::Title),
            "caption" => Some(Self::Caption),
            "tags" => Some(Self::Tags),
            "semantic" => Some(Self::Semantic),
            _ => None,
        }
    }
}

/// Parse a raw comma-separated field list.
///
/// Tokens are trimmed and lower-cased; unknown tokens are dropped and
/// duplicates are collapsed to their first appearance. `all` expands to
/// every field and `none` yields an empty selection. An unset variable
/// behaves like `all`.
pub fn parse_ai_auto_generated_fields_text(raw: Option<&str>) -> Vec<AiAutoGeneratedField> {
    let Some(raw) = raw else {
        return AiAutoGeneratedField::ALL.to_vec();
    };

    let mut fields = Vec::new();
    for token in raw.split(',') {
        let token = token.trim().to_ascii_lowercase();
        match token.as_str() {
            "all" => return AiAutoGeneratedField::ALL.to_vec(),
            "none" => return Vec::new(),
            other => {
                if let Some(field) = AiAutoGeneratedField::parse(other) {
                    if !fields.contains(&field) {
                        fields.push(field);
                    }
                }
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_selects_all_fields() {
        assert_eq!(
            parse_ai_auto_generated_fields_text(None),
            AiAutoGeneratedField::ALL.to_vec()
        );
    }

    #[test]
    fn parses_trimmed_case_insensitive_tokens() {
        assert_eq!(
            parse_ai_auto_generated_fields_text(Some(" Title, TAGS ")),
            vec![AiAutoGeneratedField::Title, AiAutoGeneratedField::Tags]
        );
    }

    #[test]
    fn unknown_tokens_and_duplicates_are_dropped() {
        assert_eq!(
            parse_ai_auto_generated_fields_text(Some("title,exif,title")),
            vec![AiAutoGeneratedField::Title]
        );
    }

    #[test]
    fn sentinels_override_other_tokens() {
        assert_eq!(
            parse_ai_auto_generated_fields_text(Some("title,all")),
            AiAutoGeneratedField::ALL.to_vec()
        );
        assert!(parse_ai_auto_generated_fields_text(Some("none")).is_empty());
    }
}
