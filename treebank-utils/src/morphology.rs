//! Decoding of Perseus-style 9-character morphological tags.
//!
//! Each position of a tag encodes one grammatical category as a single
//! character (`-` meaning the category does not apply). [`Morph::decode`]
//! resolves all nine positions into their human-readable labels.

use std::collections::BTreeMap;

use parse_display::{Display, FromStr};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Error produced when a morphological tag cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MorphError {
    /// The tag does not have exactly 9 characters.
    #[error("tag `{tag}` has length {len}, expected 9")]
    InvalidLength { tag: String, len: usize },
    /// A character is not a valid key for the category at its position.
    #[error("unknown {category} symbol `{symbol}` at position {position}")]
    UnknownSymbol {
        category: &'static str,
        position: usize,
        symbol: char,
    },
}

/// Part of speech, position 0 of a tag.
///
/// Several tag keys alias one label: `v`/`t` are both verbs, `d`/`g` both
/// adverbs, and `x`/`i` both irregular.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    FromStr,
)]
pub enum PartOfSpeech {
    #[serde(rename = "noun")]
    #[display("noun")]
    Noun,
    #[serde(rename = "verb")]
    #[display("verb")]
    Verb,
    #[serde(rename = "adjective")]
    #[display("adjective")]
    Adjective,
    #[serde(rename = "adverb")]
    #[display("adverb")]
    Adverb,
    #[serde(rename = "conjunction")]
    #[display("conjunction")]
    Conjunction,
    #[serde(rename = "article")]
    #[display("article")]
    Article,
    #[serde(rename = "pron")]
    #[display("pron")]
    Pron,
    #[serde(rename = "preposition")]
    #[display("preposition")]
    Preposition,
    #[serde(rename = "numeral")]
    #[display("numeral")]
    Numeral,
    #[serde(rename = "exclamation")]
    #[display("exclamation")]
    Exclamation,
    #[serde(rename = "punctuation")]
    #[display("punctuation")]
    Punctuation,
    #[serde(rename = "irregular")]
    #[display("irregular")]
    Irregular,
    /// The category does not apply to this word.
    #[serde(rename = "-")]
    #[display("-")]
    Unset,
}

impl PartOfSpeech {
    /// Human-readable category name, as reported in errors.
    pub const CATEGORY: &'static str = "part of speech";

    /// Resolves the single-character key used at this category's tag
    /// position, or `None` if the key is not in the table.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'n' => Some(Self::Noun),
            'v' | 't' => Some(Self::Verb),
            'a' => Some(Self::Adjective),
            'd' | 'g' => Some(Self::Adverb),
            'c' => Some(Self::Conjunction),
            'l' => Some(Self::Article),
            'p' => Some(Self::Pron),
            'r' => Some(Self::Preposition),
            'm' => Some(Self::Numeral),
            'e' => Some(Self::Exclamation),
            'u' => Some(Self::Punctuation),
            'x' | 'i' => Some(Self::Irregular),
            '-' => Some(Self::Unset),
            _ => None,
        }
    }
}

/// Grammatical person, position 1.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    FromStr,
)]
pub enum Person {
    #[serde(rename = "1st")]
    #[display("1st")]
    First,
    #[serde(rename = "2nd")]
    #[display("2nd")]
    Second,
    #[serde(rename = "3rd")]
    #[display("3rd")]
    Third,
    #[serde(rename = "-")]
    #[display("-")]
    Unset,
}

impl Person {
    pub const CATEGORY: &'static str = "person";

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '1' => Some(Self::First),
            '2' => Some(Self::Second),
            '3' => Some(Self::Third),
            '-' => Some(Self::Unset),
            _ => None,
        }
    }
}

/// Grammatical number, position 2. Ancient Greek keeps the dual.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    FromStr,
)]
pub enum Number {
    #[serde(rename = "singular")]
    #[display("singular")]
    Singular,
    #[serde(rename = "plural")]
    #[display("plural")]
    Plural,
    #[serde(rename = "dual")]
    #[display("dual")]
    Dual,
    #[serde(rename = "-")]
    #[display("-")]
    Unset,
}

impl Number {
    pub const CATEGORY: &'static str = "number";

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            's' => Some(Self::Singular),
            'p' => Some(Self::Plural),
            'd' => Some(Self::Dual),
            '-' => Some(Self::Unset),
            _ => None,
        }
    }
}

/// Tense, position 3.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    FromStr,
)]
pub enum Tense {
    #[serde(rename = "present")]
    #[display("present")]
    Present,
    #[serde(rename = "imperfect")]
    #[display("imperfect")]
    Imperfect,
    #[serde(rename = "future")]
    #[display("future")]
    Future,
    #[serde(rename = "perfect")]
    #[display("perfect")]
    Perfect,
    #[serde(rename = "pluperfect")]
    #[display("pluperfect")]
    Pluperfect,
    #[serde(rename = "future_perfect")]
    #[display("future_perfect")]
    FuturePerfect,
    #[serde(rename = "aorist")]
    #[display("aorist")]
    Aorist,
    #[serde(rename = "-")]
    #[display("-")]
    Unset,
}

impl Tense {
    pub const CATEGORY: &'static str = "tense";

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'p' => Some(Self::Present),
            'i' => Some(Self::Imperfect),
            'f' => Some(Self::Future),
            'r' => Some(Self::Perfect),
            'l' => Some(Self::Pluperfect),
            't' => Some(Self::FuturePerfect),
            'a' => Some(Self::Aorist),
            '-' => Some(Self::Unset),
            _ => None,
        }
    }
}

/// Mood, position 4.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    FromStr,
)]
pub enum Mood {
    #[serde(rename = "indicative")]
    #[display("indicative")]
    Indicative,
    #[serde(rename = "subjunctive")]
    #[display("subjunctive")]
    Subjunctive,
    #[serde(rename = "optative")]
    #[display("optative")]
    Optative,
    #[serde(rename = "imperative")]
    #[display("imperative")]
    Imperative,
    #[serde(rename = "infinitive")]
    #[display("infinitive")]
    Infinitive,
    #[serde(rename = "participle")]
    #[display("participle")]
    Participle,
    #[serde(rename = "-")]
    #[display("-")]
    Unset,
}

impl Mood {
    pub const CATEGORY: &'static str = "mood";

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'i' => Some(Self::Indicative),
            's' => Some(Self::Subjunctive),
            'o' => Some(Self::Optative),
            'm' => Some(Self::Imperative),
            'n' => Some(Self::Infinitive),
            'p' => Some(Self::Participle),
            '-' => Some(Self::Unset),
            _ => None,
        }
    }
}

/// Voice, position 5. Mediopassive is distinct from plain passive.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    FromStr,
)]
pub enum Voice {
    #[serde(rename = "active")]
    #[display("active")]
    Active,
    #[serde(rename = "middle")]
    #[display("middle")]
    Middle,
    #[serde(rename = "passive")]
    #[display("passive")]
    Passive,
    #[serde(rename = "mediopassive")]
    #[display("mediopassive")]
    Mediopassive,
    #[serde(rename = "-")]
    #[display("-")]
    Unset,
}

impl Voice {
    pub const CATEGORY: &'static str = "voice";

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'a' => Some(Self::Active),
            'm' => Some(Self::Middle),
            'p' => Some(Self::Passive),
            'e' => Some(Self::Mediopassive),
            '-' => Some(Self::Unset),
            _ => None,
        }
    }
}

/// Grammatical gender, position 6.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    FromStr,
)]
pub enum Gender {
    #[serde(rename = "masculine")]
    #[display("masculine")]
    Masculine,
    #[serde(rename = "feminine")]
    #[display("feminine")]
    Feminine,
    #[serde(rename = "neuter")]
    #[display("neuter")]
    Neuter,
    #[serde(rename = "-")]
    #[display("-")]
    Unset,
}

impl Gender {
    pub const CATEGORY: &'static str = "gender";

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'm' => Some(Self::Masculine),
            'f' => Some(Self::Feminine),
            'n' => Some(Self::Neuter),
            '-' => Some(Self::Unset),
            _ => None,
        }
    }
}

/// Grammatical case, position 7.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    FromStr,
)]
pub enum Case {
    #[serde(rename = "nominative")]
    #[display("nominative")]
    Nominative,
    #[serde(rename = "genitive")]
    #[display("genitive")]
    Genitive,
    #[serde(rename = "dative")]
    #[display("dative")]
    Dative,
    #[serde(rename = "accusative")]
    #[display("accusative")]
    Accusative,
    #[serde(rename = "vocative")]
    #[display("vocative")]
    Vocative,
    #[serde(rename = "-")]
    #[display("-")]
    Unset,
}

impl Case {
    pub const CATEGORY: &'static str = "case";

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'n' => Some(Self::Nominative),
            'g' => Some(Self::Genitive),
            'd' => Some(Self::Dative),
            'a' => Some(Self::Accusative),
            'v' => Some(Self::Vocative),
            '-' => Some(Self::Unset),
            _ => None,
        }
    }
}

/// Degree of comparison, position 8. The labels keep the treebank's
/// abbreviated forms `comp` and `superl`.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    FromStr,
)]
pub enum Degree {
    #[serde(rename = "comp")]
    #[display("comp")]
    Comparative,
    #[serde(rename = "superl")]
    #[display("superl")]
    Superlative,
    #[serde(rename = "-")]
    #[display("-")]
    Unset,
}

impl Degree {
    pub const CATEGORY: &'static str = "degree";

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'c' => Some(Self::Comparative),
            's' => Some(Self::Superlative),
            '-' => Some(Self::Unset),
            _ => None,
        }
    }
}

/// The fully decoded form of one 9-character morphological tag.
///
/// Decoding resolves each position independently against its category's
/// table; no grammatical consistency is checked across positions (a noun
/// carrying a tense decodes fine, exactly as annotated).
#[derive(
    Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, JsonSchema,
)]
pub struct Morph {
    pub pos: PartOfSpeech,
    pub person: Person,
    pub number: Number,
    pub tense: Tense,
    pub mood: Mood,
    pub voice: Voice,
    pub gender: Gender,
    pub case: Case,
    pub degree: Degree,
}

impl Morph {
    /// Decodes a raw 9-character tag such as `"v3spia---"`.
    ///
    /// Fails with [`MorphError::InvalidLength`] if the tag is not exactly
    /// 9 characters, and with [`MorphError::UnknownSymbol`] if any
    /// character is not a key of its position's table. All-or-nothing: no
    /// partially decoded value is ever produced.
    ///
    /// # Example
    ///
    /// ```
    /// use treebank_utils::morphology::{Morph, PartOfSpeech, Tense};
    ///
    /// let morph = Morph::decode("v3spia---").unwrap();
    /// assert_eq!(morph.pos, PartOfSpeech::Verb);
    /// assert_eq!(morph.tense, Tense::Present);
    /// assert_eq!(morph.gender.to_string(), "-");
    /// ```
    pub fn decode(tag: &str) -> Result<Self, MorphError> {
        let symbols: Vec<char> = tag.chars().collect();
        if symbols.len() != 9 {
            return Err(MorphError::InvalidLength {
                tag: tag.to_string(),
                len: symbols.len(),
            });
        }
        let unknown = |category: &'static str, position: usize| MorphError::UnknownSymbol {
            category,
            position,
            symbol: symbols[position],
        };
        Ok(Self {
            pos: PartOfSpeech::from_symbol(symbols[0])
                .ok_or_else(|| unknown(PartOfSpeech::CATEGORY, 0))?,
            person: Person::from_symbol(symbols[1]).ok_or_else(|| unknown(Person::CATEGORY, 1))?,
            number: Number::from_symbol(symbols[2]).ok_or_else(|| unknown(Number::CATEGORY, 2))?,
            tense: Tense::from_symbol(symbols[3]).ok_or_else(|| unknown(Tense::CATEGORY, 3))?,
            mood: Mood::from_symbol(symbols[4]).ok_or_else(|| unknown(Mood::CATEGORY, 4))?,
            voice: Voice::from_symbol(symbols[5]).ok_or_else(|| unknown(Voice::CATEGORY, 5))?,
            gender: Gender::from_symbol(symbols[6]).ok_or_else(|| unknown(Gender::CATEGORY, 6))?,
            case: Case::from_symbol(symbols[7]).ok_or_else(|| unknown(Case::CATEGORY, 7))?,
            degree: Degree::from_symbol(symbols[8]).ok_or_else(|| unknown(Degree::CATEGORY, 8))?,
        })
    }

    /// All nine categories as name → label, in sorted key order.
    pub fn full(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("pos", self.pos.to_string()),
            ("person", self.person.to_string()),
            ("number", self.number.to_string()),
            ("tense", self.tense.to_string()),
            ("mood", self.mood.to_string()),
            ("voice", self.voice.to_string()),
            ("gender", self.gender.to_string()),
            ("case", self.case.to_string()),
            ("degree", self.degree.to_string()),
        ])
    }
}

impl std::str::FromStr for Morph {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
