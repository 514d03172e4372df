//! The fixed set of prompt fields and their document labels.

/// One named slot of the serialized prompt document.
///
/// Variants are listed in document order; [`Field::ALL`] yields them in the
/// order the serializer writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Main musical genre.
    PrimaryGenre,
    /// Specific rhythm/style under the genre.
    SpecificStyle,
    /// Recording aesthetic (production character).
    RecordingAesthetic,
    /// Artistic influence tags.
    ArtisticInfluence,
    /// Emotional vibe tags; the only list-typed field.
    EmotionalVibe,
    /// External references (artists, songs).
    ExternalRefs,
    /// Lyric language.
    Language,
    /// Song topic.
    Topic,
    /// Core message of the lyrics.
    CoreMessage,
    /// Free keywords.
    Keywords,
    /// Target audience.
    TargetAudience,
    /// Narrator perspective.
    NarratorPerspective,
    /// Song structure layout.
    StructureFormat,
    /// Lyrical tone tags.
    LyricalTone,
}

impl Field {
    /// Every field in document order.
    pub const ALL: [Field; 14] = [
        Field::PrimaryGenre,
        Field::SpecificStyle,
        Field::RecordingAesthetic,
        Field::ArtisticInfluence,
        Field::EmotionalVibe,
        Field::ExternalRefs,
        Field::Language,
        Field::Topic,
        Field::CoreMessage,
        Field::Keywords,
        Field::TargetAudience,
        Field::NarratorPerspective,
        Field::StructureFormat,
        Field::LyricalTone,
    ];

    /// The canonical label used in the serialized document.
    pub fn label(&self) -> &'static str {
        match self {
            Field::PrimaryGenre => "primary_genre",
            Field::SpecificStyle => "specific_style",
            Field::RecordingAesthetic => "recording_aesthetic",
            Field::ArtisticInfluence => "artistic_influence",
            Field::EmotionalVibe => "emotional_vibe",
            Field::ExternalRefs => "external_refs",
            Field::Language => "language",
            Field::Topic => "topic",
            Field::CoreMessage => "core_message",
            Field::Keywords => "keywords",
            Field::TargetAudience => "target_audience",
            Field::NarratorPerspective => "narrator_perspective",
            Field::StructureFormat => "structure_format",
            Field::LyricalTone => "lyrical_tone",
        }
    }

    /// Resolves a document label back to its field.
    pub fn from_label(label: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.label() == label)
    }

    /// True for the one list-typed field.
    pub fn is_list(&self) -> bool {
        matches!(self, Field::EmotionalVibe)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A field's current value: a scalar string or a list of tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Single string value.
    Scalar(String),
    /// Tag list (emotional vibe).
    List(Vec<String>),
}

impl FieldValue {
    /// The empty value matching a field's type.
    pub fn empty_for(field: Field) -> FieldValue {
        if field.is_list() {
            FieldValue::List(Vec::new())
        } else {
            FieldValue::Scalar(String::new())
        }
    }

    /// True when the value would serialize as the sentinel.
    pub fn is_empty(&self) -> bool {
        self.document_text().is_empty()
    }

    /// The text interpolated into the document: list elements that are
    /// non-empty joined with ", ", or the trimmed scalar.
    pub fn document_text(&self) -> String {
        match self {
            FieldValue::Scalar(value) => value.trim().to_string(),
            FieldValue::List(values) => values
                .iter()
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
