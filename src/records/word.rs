//! Word records: one dictionary entry per LJSON line.
//!
//! Field names on the wire are deliberately short (`k`, `r`, `s`, ...) to keep
//! the download small. The Rust types use descriptive names and map back to
//! the wire names when serialized.
//!
//! The `km` and `rm` arrays use `0` to mean "no metadata for this headword".
//! That sentinel is decoded straight to `None`, so a record serialized again
//! carries `null` in those slots, which is the form backends persist.

use serde::Serialize;
use serde_json::Value;

use crate::records::schema::{
    array, integer_at_least, literal_true, nonempty_array, nonempty_string, sentinel_or,
    string, string_array, ObjectView, SchemaError, SchemaResult,
};

/// Number of bits used by each gloss in [`WordSense::gloss_types`].
pub const BITS_PER_GLOSS_TYPE: u32 = 3;

/// Kind of a single gloss, decoded from the `gt` bitfield of a sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlossType {
    None,
    /// Explanatory
    Expl,
    /// Literal
    Lit,
    /// Figurative
    Fig,
    /// Trademark
    Tm,
}

impl GlossType {
    fn from_bits(bits: u64) -> Self {
        match bits {
            1 => GlossType::Expl,
            2 => GlossType::Lit,
            3 => GlossType::Fig,
            4 => GlossType::Tm,
            _ => GlossType::None,
        }
    }
}

/// Metadata for a kanji headword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KanjiMeta {
    /// Information tags. Usually a known kanji-info value, but any string is
    /// accepted so newer data still loads.
    #[serde(rename = "i", skip_serializing_if = "Option::is_none")]
    pub info: Option<Vec<String>>,
    /// Priority tags.
    #[serde(rename = "p", skip_serializing_if = "Option::is_none")]
    pub priority: Option<Vec<String>>,
}

impl KanjiMeta {
    fn from_value(value: &Value, path: &str) -> SchemaResult<Self> {
        let object = ObjectView::new(value, path)?;
        Ok(Self {
            info: object.optional("i", string_array)?,
            priority: object.optional("p", string_array)?,
        })
    }
}

/// One pitch accent of a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accent {
    /// Mora after which the pitch drops. 0 is 平板 (flat).
    #[serde(rename = "i")]
    pub drop: u64,
    /// Parts of speech this accent applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<Vec<String>>,
}

impl Accent {
    fn from_value(value: &Value, path: &str) -> SchemaResult<Self> {
        let object = ObjectView::new(value, path)?;
        Ok(Self {
            drop: object.required("i", |v, p| integer_at_least(v, p, 0))?,
            pos: object.optional("pos", string_array)?,
        })
    }
}

/// Pitch accent data: either a single drop position or a detailed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PitchAccent {
    Drop(u64),
    List(Vec<Accent>),
}

impl PitchAccent {
    fn from_value(value: &Value, path: &str) -> SchemaResult<Self> {
        match value {
            Value::Array(_) => {
                array(value, path, Accent::from_value).map(PitchAccent::List)
            }
            Value::Number(_) => integer_at_least(value, path, 0).map(PitchAccent::Drop),
            other => Err(SchemaError::new(
                path,
                format!("Expected an integer or a list of accents, but received: {other}"),
            )),
        }
    }
}

/// Metadata for a kana reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadingMeta {
    #[serde(rename = "i", skip_serializing_if = "Option::is_none")]
    pub info: Option<Vec<String>>,
    #[serde(rename = "p", skip_serializing_if = "Option::is_none")]
    pub priority: Option<Vec<String>>,
    /// Bitmask of the kanji headwords (by position in `k`) this reading
    /// applies to. Absent means all of them, `0` means none.
    #[serde(rename = "app", skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<u64>,
    #[serde(rename = "a", skip_serializing_if = "Option::is_none")]
    pub accent: Option<PitchAccent>,
}

impl ReadingMeta {
    fn from_value(value: &Value, path: &str) -> SchemaResult<Self> {
        let object = ObjectView::new(value, path)?;
        Ok(Self {
            info: object.optional("i", string_array)?,
            priority: object.optional("p", string_array)?,
            applies_to: object.optional("app", |v, p| integer_at_least(v, p, 0))?,
            accent: object.optional("a", PitchAccent::from_value)?,
        })
    }

    /// Whether this reading applies to the kanji headword at `index`.
    pub fn applies_to_kanji(&self, index: usize) -> bool {
        bitmask_includes(self.applies_to, index)
    }
}

fn bitmask_includes(mask: Option<u64>, index: usize) -> bool {
    match mask {
        None => true,
        Some(mask) => index < 64 && mask & (1 << index) != 0,
    }
}

/// A cross-reference or antonym target.
///
/// A target is accepted when it matches any of three shapes: a non-empty
/// `k`, a non-empty `r`, or a non-empty `k` with a string `r`. Fields that
/// do not fit the matching shape are ignored, so `{"k": "", "r": "x"}` is a
/// reading reference. When `k` matches and `r` is a string, both are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CrossReference {
    Kanji {
        k: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        sense: Option<u64>,
    },
    Reading {
        r: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        sense: Option<u64>,
    },
    KanjiReading {
        k: String,
        r: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        sense: Option<u64>,
    },
}

impl CrossReference {
    fn from_value(value: &Value, path: &str) -> SchemaResult<Self> {
        let object = ObjectView::new(value, path)?;
        let sense = object.optional("sense", |v, p| integer_at_least(v, p, 0))?;
        let kanji = object.required("k", nonempty_string);
        let reading = object.required("r", string);
        match (kanji, reading) {
            (Ok(k), Ok(r)) => Ok(CrossReference::KanjiReading { k, r, sense }),
            (Ok(k), Err(_)) => Ok(CrossReference::Kanji { k, sense }),
            (Err(_), Ok(r)) if !r.is_empty() => Ok(CrossReference::Reading { r, sense }),
            (Err(kanji_error), _) => Err(SchemaError::new(
                path,
                format!(
                    "Expected a cross-reference with a non-empty `k` or `r`, but none matched ({kanji_error})"
                ),
            )),
        }
    }

    /// Index of the target sense, if the reference names one.
    pub fn sense(&self) -> Option<u64> {
        match self {
            CrossReference::Kanji { sense, .. }
            | CrossReference::Reading { sense, .. }
            | CrossReference::KanjiReading { sense, .. } => *sense,
        }
    }
}

/// Source-language information for a loan word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LangSource {
    /// Source language. `None` means English.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// The term in the source language. May be empty.
    #[serde(rename = "src", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Only part of the word comes from this source.
    #[serde(skip_serializing_if = "is_false")]
    pub part: bool,
    /// Made from foreign words without their literal meaning (和製).
    #[serde(skip_serializing_if = "is_false")]
    pub wasei: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl LangSource {
    fn from_value(value: &Value, path: &str) -> SchemaResult<Self> {
        let object = ObjectView::new(value, path)?;
        Ok(Self {
            lang: object.optional("lang", nonempty_string)?,
            source: object.optional("src", string)?,
            part: object.optional("part", literal_true)?.unwrap_or(false),
            wasei: object.optional("wasei", literal_true)?.unwrap_or(false),
        })
    }
}

/// One sense (meaning) of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSense {
    #[serde(rename = "g")]
    pub glosses: Vec<String>,
    /// Gloss types, [`BITS_PER_GLOSS_TYPE`] bits per gloss. Absent when no
    /// gloss has a type.
    #[serde(rename = "gt", skip_serializing_if = "Option::is_none")]
    pub gloss_type_bits: Option<u64>,
    /// Gloss language. `None` means English.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(rename = "kapp", skip_serializing_if = "Option::is_none")]
    pub kanji_applies_to: Option<u64>,
    #[serde(rename = "rapp", skip_serializing_if = "Option::is_none")]
    pub readings_apply_to: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misc: Option<Vec<String>>,
    #[serde(rename = "dial", skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Vec<String>>,
    #[serde(rename = "inf", skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(rename = "xref", skip_serializing_if = "Option::is_none")]
    pub cross_references: Option<Vec<CrossReference>>,
    #[serde(rename = "ant", skip_serializing_if = "Option::is_none")]
    pub antonyms: Option<Vec<CrossReference>>,
    #[serde(rename = "lsrc", skip_serializing_if = "Option::is_none")]
    pub lang_sources: Option<Vec<LangSource>>,
}

impl WordSense {
    fn from_value(value: &Value, path: &str) -> SchemaResult<Self> {
        let object = ObjectView::new(value, path)?;
        Ok(Self {
            glosses: object.required("g", |v, p| nonempty_array(v, p, nonempty_string))?,
            gloss_type_bits: object.optional("gt", |v, p| integer_at_least(v, p, 1))?,
            lang: object.optional("lang", nonempty_string)?,
            kanji_applies_to: object.optional("kapp", |v, p| integer_at_least(v, p, 0))?,
            readings_apply_to: object.optional("rapp", |v, p| integer_at_least(v, p, 0))?,
            pos: object.optional("pos", string_array)?,
            field: object.optional("field", string_array)?,
            misc: object.optional("misc", string_array)?,
            dialect: object.optional("dial", string_array)?,
            info: object.optional("inf", nonempty_string)?,
            cross_references: object
                .optional("xref", |v, p| nonempty_array(v, p, CrossReference::from_value))?,
            antonyms: object.optional("ant", |v, p| nonempty_array(v, p, CrossReference::from_value))?,
            lang_sources: object.optional("lsrc", |v, p| nonempty_array(v, p, LangSource::from_value))?,
        })
    }

    /// Type of the gloss at `index`.
    pub fn gloss_type(&self, index: usize) -> GlossType {
        let Some(bits) = self.gloss_type_bits else {
            return GlossType::None;
        };
        let shift = index as u64 * BITS_PER_GLOSS_TYPE as u64;
        if shift >= 64 {
            return GlossType::None;
        }
        GlossType::from_bits((bits >> shift) & ((1 << BITS_PER_GLOSS_TYPE) - 1))
    }

    /// Types of every gloss, in order.
    pub fn gloss_types(&self) -> Vec<GlossType> {
        (0..self.glosses.len()).map(|i| self.gloss_type(i)).collect()
    }

    /// Gloss language, defaulting to English.
    pub fn lang_or_default(&self) -> &str {
        self.lang.as_deref().unwrap_or("en")
    }

    pub fn applies_to_kanji(&self, index: usize) -> bool {
        bitmask_includes(self.kanji_applies_to, index)
    }

    pub fn applies_to_reading(&self, index: usize) -> bool {
        bitmask_includes(self.readings_apply_to, index)
    }
}

/// A validated dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    pub id: u64,
    /// Kanji headwords.
    #[serde(rename = "k", skip_serializing_if = "Option::is_none")]
    pub kanji: Option<Vec<String>>,
    /// Per-headword metadata, parallel to `kanji`.
    #[serde(rename = "km", skip_serializing_if = "Option::is_none")]
    pub kanji_meta: Option<Vec<Option<KanjiMeta>>>,
    /// Kana readings.
    #[serde(rename = "r")]
    pub readings: Vec<String>,
    /// Per-reading metadata, parallel to `readings`.
    #[serde(rename = "rm", skip_serializing_if = "Option::is_none")]
    pub reading_meta: Option<Vec<Option<ReadingMeta>>>,
    #[serde(rename = "s")]
    pub senses: Vec<WordSense>,
}

impl WordRecord {
    /// Validates `value` as a word record.
    pub fn from_value(value: &Value) -> SchemaResult<Self> {
        let object = ObjectView::new(value, "")?;
        Ok(Self {
            id: object.required("id", |v, p| integer_at_least(v, p, 1))?,
            kanji: object.optional("k", |v, p| nonempty_array(v, p, string))?,
            kanji_meta: object.optional("km", |v, p| {
                nonempty_array(v, p, |slot, slot_path| sentinel_or(slot, slot_path, KanjiMeta::from_value))
            })?,
            readings: object.required("r", |v, p| nonempty_array(v, p, nonempty_string))?,
            reading_meta: object.optional("rm", |v, p| {
                nonempty_array(v, p, |slot, slot_path| sentinel_or(slot, slot_path, ReadingMeta::from_value))
            })?,
            senses: object.required("s", |v, p| nonempty_array(v, p, WordSense::from_value))?,
        })
    }

    /// Metadata for the kanji headword at `index`, if any.
    pub fn kanji_meta_at(&self, index: usize) -> Option<&KanjiMeta> {
        self.kanji_meta.as_ref()?.get(index)?.as_ref()
    }

    /// Metadata for the reading at `index`, if any.
    pub fn reading_meta_at(&self, index: usize) -> Option<&ReadingMeta> {
        self.reading_meta.as_ref()?.get(index)?.as_ref()
    }

    /// Keys a reading index stores for this entry: every reading, then
    /// every kanji headword.
    pub fn search_keys(&self) -> impl Iterator<Item = &str> {
        self.readings
            .iter()
            .chain(self.kanji.iter().flatten())
            .map(String::as_str)
    }
}

impl TryFrom<&Value> for WordRecord {
    type Error = SchemaError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        WordRecord::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> Value {
        json!({
            "id": 1_000_220,
            "k": ["明白", "明々白々"],
            "km": [0, { "i": ["ateji"], "p": ["ichi1", "news1"] }],
            "r": ["めいはく", "あからさま"],
            "rm": [
                { "app": 1, "a": 0 },
                { "app": 0, "a": [{ "i": 3, "pos": ["adj-na"] }, { "i": 0 }] }
            ],
            "s": [
                {
                    "g": ["obvious", "clear", "plain"],
                    "gt": 0b001_000_010,
                    "pos": ["adj-na"],
                    "misc": ["yoji"],
                    "xref": [{ "k": "明らか" }, { "r": "はっきり", "sense": 1 }, { "k": "明白", "r": "" }],
                    "lsrc": [{ "lang": "de", "src": "", "part": true }, { "wasei": true }]
                },
                { "g": ["evident"], "lang": "fr", "kapp": 2, "rapp": 1, "inf": "formal", "ant": [{ "k": "曖昧" }] }
            ]
        })
    }

    #[test]
    fn test_full_record() {
        let record = WordRecord::from_value(&full_record()).unwrap();
        assert_eq!(record.id, 1_000_220);
        assert_eq!(record.kanji.as_ref().unwrap().len(), 2);
        assert_eq!(record.kanji_meta_at(0), None);
        assert_eq!(record.kanji_meta_at(1).unwrap().priority.as_ref().unwrap(), &vec!["ichi1", "news1"]);
        assert_eq!(record.reading_meta_at(0).unwrap().accent, Some(PitchAccent::Drop(0)));
        match &record.reading_meta_at(1).unwrap().accent {
            Some(PitchAccent::List(accents)) => {
                assert_eq!(accents.len(), 2);
                assert_eq!(accents[0].drop, 3);
                assert_eq!(accents[1].pos, None);
            }
            other => panic!("unexpected accent: {:?}", other),
        }

        let sense = &record.senses[0];
        let xrefs = sense.cross_references.as_ref().unwrap();
        assert!(matches!(&xrefs[0], CrossReference::Kanji { k, sense: None } if k == "明らか"));
        assert_eq!(xrefs[1].sense(), Some(1));
        assert!(matches!(&xrefs[2], CrossReference::KanjiReading { r, .. } if r.is_empty()));

        let sources = sense.lang_sources.as_ref().unwrap();
        assert_eq!(sources[0].source.as_deref(), Some(""));
        assert!(sources[0].part);
        assert!(!sources[0].wasei);
        assert!(sources[1].wasei);
        assert_eq!(sources[1].lang, None);

        assert_eq!(record.senses[1].lang_or_default(), "fr");
        assert_eq!(sense.lang_or_default(), "en");
    }

    #[test]
    fn test_cross_reference_shapes() {
        let target = |xref: Value| {
            let record = json!({ "id": 1, "r": ["あ"], "s": [{ "g": ["a"], "xref": [xref] }] });
            WordRecord::from_value(&record).map(|mut r| r.senses.remove(0).cross_references.unwrap().remove(0))
        };

        // An empty kanji falls back to the reading shape.
        assert_eq!(
            target(json!({ "k": "", "r": "はっきり" })).unwrap(),
            CrossReference::Reading { r: "はっきり".to_string(), sense: None }
        );
        // A reading that is not a string is ignored by the kanji shape.
        assert_eq!(
            target(json!({ "k": "明らか", "r": 5, "sense": 2 })).unwrap(),
            CrossReference::Kanji { k: "明らか".to_string(), sense: Some(2) }
        );
        assert_eq!(
            target(json!({ "k": "明白", "r": "めいはく" })).unwrap(),
            CrossReference::KanjiReading { k: "明白".to_string(), r: "めいはく".to_string(), sense: None }
        );
        assert!(target(json!({ "k": "", "r": "" })).is_err());
        assert!(target(json!({ "k": [], "r": null })).is_err());
    }

    #[test]
    fn test_sentinel_serializes_as_null() {
        let record = WordRecord::from_value(&full_record()).unwrap();
        let stored = serde_json::to_value(&record).unwrap();
        assert_eq!(stored["km"][0], Value::Null);
        assert_eq!(stored["km"][1]["p"], json!(["ichi1", "news1"]));
        assert_eq!(stored["s"][0]["lsrc"][0], json!({ "lang": "de", "src": "", "part": true }));
        assert_eq!(stored["s"][0]["xref"][2], json!({ "k": "明白", "r": "" }));
        assert!(stored.get("type").is_none());
    }

    #[test]
    fn test_minimal_record() {
        let record = WordRecord::from_value(&json!({ "id": 1, "r": ["あ"], "s": [{ "g": ["a"] }] })).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.kanji, None);
        assert_eq!(record.reading_meta, None);
        assert_eq!(record.senses[0].gloss_types(), vec![GlossType::None]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let value = json!({ "id": 7, "r": ["か"], "s": [{ "g": ["mosquito"], "extra": 1 }], "future": [1, 2] });
        assert!(WordRecord::from_value(&value).is_ok());
    }

    #[test]
    fn test_schema_rejections() {
        let cases = [
            (json!({ "id": 1, "s": [{ "g": ["a"] }] }), "r"),
            (json!({ "id": 1, "r": [], "s": [{ "g": ["a"] }] }), "r"),
            (json!({ "id": 1, "r": [""], "s": [{ "g": ["a"] }] }), "r.0"),
            (json!({ "id": 0, "r": ["あ"], "s": [{ "g": ["a"] }] }), "id"),
            (json!({ "id": 1, "r": ["あ"], "s": [] }), "s"),
            (json!({ "id": 1, "r": ["あ"], "s": [{ "g": [] }] }), "s.0.g"),
            (json!({ "id": 1, "r": ["あ"], "s": [{ "g": [""] }] }), "s.0.g.0"),
            (json!({ "id": 1, "r": ["あ"], "rm": [1], "s": [{ "g": ["a"] }] }), "rm.0"),
            (json!({ "id": 1, "r": ["あ"], "rm": ["x"], "s": [{ "g": ["a"] }] }), "rm.0"),
            (json!({ "id": 1, "r": ["あ"], "rm": [], "s": [{ "g": ["a"] }] }), "rm"),
            (json!({ "id": 1, "k": [], "r": ["あ"], "s": [{ "g": ["a"] }] }), "k"),
            (json!({ "id": 1, "r": ["あ"], "s": [{ "g": ["a"], "gt": 0 }] }), "s.0.gt"),
            (json!({ "id": 1, "r": ["あ"], "s": [{ "g": ["a"], "lang": "" }] }), "s.0.lang"),
            (json!({ "id": 1, "r": ["あ"], "s": [{ "g": ["a"], "xref": [] }] }), "s.0.xref"),
            (json!({ "id": 1, "r": ["あ"], "s": [{ "g": ["a"], "xref": [{ "sense": 1 }] }] }), "s.0.xref.0"),
            (json!({ "id": 1, "r": ["あ"], "s": [{ "g": ["a"], "ant": [{ "r": "" }] }] }), "s.0.ant.0"),
            (json!({ "id": 1, "r": ["あ"], "s": [{ "g": ["a"], "xref": [{ "k": 5, "r": 5 }] }] }), "s.0.xref.0"),
            (json!({ "id": 1, "r": ["あ"], "s": [{ "g": ["a"], "xref": [{ "k": "明らか", "sense": -1 }] }] }), "s.0.xref.0.sense"),
            (json!({ "id": 1, "r": ["あ"], "s": [{ "g": ["a"], "lsrc": [{ "part": false }] }] }), "s.0.lsrc.0.part"),
            (json!({ "id": 1, "r": ["あ"], "s": [{ "g": ["a"], "inf": null }] }), "s.0.inf"),
            (json!({ "id": 1, "r": ["あ"], "rm": [{ "a": "LH" }], "s": [{ "g": ["a"] }] }), "rm.0.a"),
            (json!({ "id": 1, "r": ["あ"], "rm": [{ "a": [{ "i": -1 }] }], "s": [{ "g": ["a"] }] }), "rm.0.a.0.i"),
        ];
        for (value, path) in cases {
            match WordRecord::from_value(&value) {
                Ok(record) => panic!("{} should be rejected, got {:?}", value, record),
                Err(err) => assert_eq!(err.path, path, "wrong path for {}: {}", value, err),
            }
        }
    }

    #[test]
    fn test_gloss_types() {
        let record = WordRecord::from_value(&full_record()).unwrap();
        assert_eq!(
            record.senses[0].gloss_types(),
            vec![GlossType::Lit, GlossType::None, GlossType::Expl]
        );
        let sense = WordSense { gloss_type_bits: Some(4 << 3), ..record.senses[1].clone() };
        assert_eq!(sense.gloss_type(1), GlossType::Tm);
        assert_eq!(sense.gloss_type(40), GlossType::None);
    }

    #[test]
    fn test_applicability_masks() {
        let record = WordRecord::from_value(&full_record()).unwrap();
        let first = record.reading_meta_at(0).unwrap();
        assert!(first.applies_to_kanji(0));
        assert!(!first.applies_to_kanji(1));
        let second = record.reading_meta_at(1).unwrap();
        assert!(!second.applies_to_kanji(0));
        assert!(ReadingMeta::default().applies_to_kanji(5));

        let sense = &record.senses[1];
        assert!(!sense.applies_to_kanji(0));
        assert!(sense.applies_to_kanji(1));
        assert!(sense.applies_to_reading(0));
        assert!(record.senses[0].applies_to_reading(1));
    }

    #[test]
    fn test_search_keys() {
        let record = WordRecord::from_value(&full_record()).unwrap();
        let keys: Vec<&str> = record.search_keys().collect();
        assert_eq!(keys, vec!["めいはく", "あからさま", "明白", "明々白々"]);
    }
}
