//! Record shapes and tag decoding for Perseus-style dependency treebanks.
//!
//! A treebank sentence is a list of tokens, each carrying a compact
//! 9-character morphological tag (`postag`). This crate defines the inert
//! record shapes ([`Sentence`], [`Word`], [`Artificial`]) and the decoder
//! that turns a tag into its human-readable categories.
//!
//! # Example
//!
//! ```
//! use treebank_utils::{Morph, Word};
//!
//! let word = Word {
//!     id: "3".to_string(),
//!     form: "θεός".to_string(),
//!     lemma: Some("θεός".to_string()),
//!     postag: Some("n-s---mn-".to_string()),
//!     head: Some("2".to_string()),
//!     relation: Some("SBJ".to_string()),
//!     cite: None,
//! };
//!
//! let morph = Morph::decode(word.postag.as_deref().unwrap()).unwrap();
//! assert_eq!(morph.pos.to_string(), "noun");
//! assert_eq!(morph.case.to_string(), "nominative");
//! ```

pub mod morphology;

pub use morphology::{Morph, MorphError};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One sentence of a treebank document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Sentence {
    pub id: String,
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdoc: Option<String>,
}

/// One lexical token of a sentence.
///
/// `postag`, when present and well-formed, decodes via [`Morph::decode`];
/// the two are never linked automatically. `head` is the id of the
/// syntactic head, `None` for the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Word {
    pub id: String,
    pub form: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cite: Option<String>,
}

/// A non-lexical tree node inserted by the annotators, such as an elided
/// verb. Same shape as [`Word`] plus the `kind` discriminant (serialized
/// as `type`, e.g. `"ellipsis"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Artificial {
    pub id: String,
    pub form: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cite: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A sentence token: either a real word or an artificial node.
///
/// `Artificial` comes first so its required `type` field decides the
/// variant during untagged deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Token {
    Artificial(Artificial),
    Word(Word),
}
