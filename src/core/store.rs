use std::collections::HashMap;

use serde::{
    de::{
        MapAccess,
        Visitor,
    },
    ser::SerializeMap,
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

use super::KanshuError;

/// Wire shape of one entry: [character, reading, description, similar, related].
/// The tuple arity is what existing exported files expect, so it must not change.
type EntryTuple = (String, String, String, Vec<(String, String)>, Vec<(String, String)>);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntryTuple", into = "EntryTuple")]
pub struct Entry {
    pub character: String,
    pub reading: String,
    pub description: String,
    pub similar: Vec<(String, String)>,
    pub related: Vec<(String, String)>,
}

impl Entry {
    /// An entry counts as learned once it has a related word filled in.
    pub fn is_learned(&self) -> bool {
        self.related.first().map_or(false, |(word, _)| !word.is_empty())
    }
}

impl From<EntryTuple> for Entry {
    fn from((character, reading, description, similar, related): EntryTuple) -> Self {
        Entry { character, reading, description, similar, related }
    }
}

impl From<Entry> for EntryTuple {
    fn from(entry: Entry) -> Self {
        (entry.character, entry.reading, entry.description, entry.similar, entry.related)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Character,
    Reading,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Similar,
    Related,
}

impl Bucket {
    pub fn label(self) -> &'static str {
        match self {
            Bucket::Similar => "similar",
            Bucket::Related => "related",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairColumn {
    Word,
    Gloss,
}

/// The dataset: id -> entry, with insertion order tracked explicitly so that
/// list display and prev/next navigation never depend on map iteration order.
///
/// Mutators take `&self` and return a fresh store. A failed mutation returns
/// the error without the caller's value ever changing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    order: Vec<String>,
    entries: HashMap<String, Entry>,
}

impl EntryStore {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn first_id(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.order.iter().filter_map(|id| self.entries.get(id).map(|e| (id.as_str(), e)))
    }

    fn with_entry<F>(&self, id: &str, mutate: F) -> Result<Self, KanshuError>
    where
        F: FnOnce(&mut Entry) -> Result<(), KanshuError>,
    {
        let mut next = self.clone();
        let entry =
            next.entries.get_mut(id).ok_or_else(|| KanshuError::InvalidId(id.to_string()))?;
        mutate(entry)?;
        Ok(next)
    }

    pub fn set_field(&self, id: &str, field: TextField, value: &str) -> Result<Self, KanshuError> {
        self.with_entry(id, |entry| {
            let slot = match field {
                TextField::Character => &mut entry.character,
                TextField::Reading => &mut entry.reading,
                TextField::Description => &mut entry.description,
            };
            *slot = value.to_string();
            Ok(())
        })
    }

    pub fn set_pair(
        &self,
        id: &str,
        bucket: Bucket,
        row: usize,
        column: PairColumn,
        value: &str,
    ) -> Result<Self, KanshuError> {
        self.with_entry(id, |entry| {
            let pairs = bucket_mut(entry, bucket);
            let len = pairs.len();
            let pair = pairs.get_mut(row).ok_or(KanshuError::IndexOutOfRange {
                bucket: bucket.label(),
                index: row,
                len,
            })?;
            match column {
                PairColumn::Word => pair.0 = value.to_string(),
                PairColumn::Gloss => pair.1 = value.to_string(),
            }
            Ok(())
        })
    }

    pub fn push_pair(&self, id: &str, bucket: Bucket) -> Result<Self, KanshuError> {
        self.with_entry(id, |entry| {
            bucket_mut(entry, bucket).push((String::new(), String::new()));
            Ok(())
        })
    }

    pub fn remove_pair(&self, id: &str, bucket: Bucket, row: usize) -> Result<Self, KanshuError> {
        self.with_entry(id, |entry| {
            let pairs = bucket_mut(entry, bucket);
            if row >= pairs.len() {
                return Err(KanshuError::IndexOutOfRange {
                    bucket: bucket.label(),
                    index: row,
                    len: pairs.len(),
                });
            }
            pairs.remove(row);
            Ok(())
        })
    }

    /// Creates a blank entry under a fresh timestamp-derived id and returns
    /// the new store along with that id.
    pub fn add_entry(&self) -> (Self, String) {
        let mut stamp = chrono::Utc::now().timestamp_millis();
        let mut id = stamp.to_string();
        while self.entries.contains_key(&id) {
            stamp += 1;
            id = stamp.to_string();
        }

        let mut next = self.clone();
        next.order.push(id.clone());
        next.entries.insert(id.clone(), Entry::default());
        (next, id)
    }

    /// Read-only subset of entries that already carry a related word,
    /// in the same relative order as the full store.
    pub fn filtered(&self) -> Self {
        let mut subset = EntryStore::default();
        for (id, entry) in self.iter() {
            if entry.is_learned() {
                subset.order.push(id.to_string());
                subset.entries.insert(id.to_string(), entry.clone());
            }
        }
        subset
    }

    pub fn to_json(&self) -> Result<String, KanshuError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, KanshuError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a full dataset. Any shape problem (wrong tuple
    /// arity, non-string leaf, top level not an object) rejects the whole
    /// payload, so a caller's existing store is only ever replaced by a
    /// well-formed one.
    pub fn from_json(text: &str) -> Result<Self, KanshuError> {
        serde_json::from_str(text).map_err(|e| KanshuError::Validation(e.to_string()))
    }
}

fn bucket_mut(entry: &mut Entry, bucket: Bucket) -> &mut Vec<(String, String)> {
    match bucket {
        Bucket::Similar => &mut entry.similar,
        Bucket::Related => &mut entry.related,
    }
}

impl Serialize for EntryStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (id, entry) in self.iter() {
            map.serialize_entry(id, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EntryStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StoreVisitor;

        impl<'de> Visitor<'de> for StoreVisitor {
            type Value = EntryStore;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of entry ids to 5-element entry tuples")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut store = EntryStore::default();
                while let Some((id, entry)) = access.next_entry::<String, Entry>()? {
                    if store.entries.insert(id.clone(), entry).is_none() {
                        store.order.push(id);
                    }
                }
                Ok(store)
            }
        }

        deserializer.deserialize_map(StoreVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EntryStore {
        EntryStore::from_json(
            r#"{
                "1": ["場", "장소 장", "마당", [], [["場所", "장소"]]],
                "2": ["水", "물 수", "", [["氷", "얼음 빙"]], []]
            }"#,
        )
        .expect("sample dataset should parse")
    }

    #[test]
    fn round_trips_through_json() {
        let store = sample();
        let text = store.to_json().unwrap();
        let reparsed = EntryStore::from_json(&text).unwrap();
        assert_eq!(store, reparsed);

        // Empty strings and empty buckets survive as well.
        let (with_blank, _) = store.add_entry();
        let text = with_blank.to_json_pretty().unwrap();
        assert_eq!(with_blank, EntryStore::from_json(&text).unwrap());
    }

    #[test]
    fn preserves_document_order() {
        let store = EntryStore::from_json(r#"{"9": ["", "", "", [], []], "2": ["", "", "", [], []], "10": ["", "", "", [], []]}"#).unwrap();
        assert_eq!(store.ids(), ["9", "2", "10"]);
    }

    #[test]
    fn set_field_replaces_one_scalar() {
        let store = sample();
        let updated = store.set_field("2", TextField::Description, "물과 관련된 한자").unwrap();
        assert_eq!(updated.get("2").unwrap().description, "물과 관련된 한자");
        // Untouched siblings and the original value stay as they were.
        assert_eq!(updated.get("1"), store.get("1"));
        assert_eq!(store.get("2").unwrap().description, "");
    }

    #[test]
    fn mutators_reject_unknown_ids() {
        let store = sample();
        assert!(matches!(
            store.set_field("404", TextField::Reading, "x"),
            Err(KanshuError::InvalidId(_))
        ));
        assert!(matches!(store.push_pair("404", Bucket::Similar), Err(KanshuError::InvalidId(_))));
    }

    #[test]
    fn pair_edits_check_bounds() {
        let store = sample();
        let err = store.set_pair("1", Bucket::Related, 1, PairColumn::Word, "場合").unwrap_err();
        assert!(matches!(err, KanshuError::IndexOutOfRange { index: 1, len: 1, .. }));

        let err = store.remove_pair("2", Bucket::Related, 0).unwrap_err();
        assert!(matches!(err, KanshuError::IndexOutOfRange { len: 0, .. }));
    }

    #[test]
    fn pair_edit_and_removal() {
        let store = sample();
        let store = store.push_pair("2", Bucket::Related).unwrap();
        let store = store.set_pair("2", Bucket::Related, 0, PairColumn::Word, "水曜日").unwrap();
        let store = store.set_pair("2", Bucket::Related, 0, PairColumn::Gloss, "수요일").unwrap();
        assert_eq!(store.get("2").unwrap().related, [("水曜日".to_string(), "수요일".to_string())]);

        let store = store.push_pair("2", Bucket::Related).unwrap();
        let store = store.remove_pair("2", Bucket::Related, 0).unwrap();
        // Later rows shift down.
        assert_eq!(store.get("2").unwrap().related, [(String::new(), String::new())]);
    }

    #[test]
    fn add_entry_appends_blank_with_unique_id() {
        let store = sample();
        let (store, id_a) = store.add_entry();
        let (store, id_b) = store.add_entry();
        assert_ne!(id_a, id_b);
        assert_eq!(store.len(), 4);
        assert_eq!(store.ids().last().unwrap(), &id_b);
        assert_eq!(store.get(&id_a), Some(&Entry::default()));
    }

    #[test]
    fn filtered_keeps_only_learned_entries() {
        let store = sample();
        let before = store.clone();
        let learned = store.filtered();

        assert_eq!(learned.ids(), ["1"]);
        assert!(learned.iter().all(|(_, e)| e.is_learned()));
        for (id, entry) in store.iter() {
            if !learned.contains(id) {
                assert!(!entry.is_learned());
            }
        }
        // Non-mutating: the source is untouched.
        assert_eq!(store, before);
    }

    #[test]
    fn filtered_ignores_blank_related_rows() {
        // A pushed-but-unfilled pair does not mark the entry learned.
        let store = sample().push_pair("2", Bucket::Related).unwrap();
        assert!(!store.filtered().contains("2"));
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(matches!(EntryStore::from_json("{not json"), Err(KanshuError::Validation(_))));
        // Wrong tuple arity.
        assert!(matches!(EntryStore::from_json(r#"{"1": ["a"]}"#), Err(KanshuError::Validation(_))));
        // Wrong nesting inside a bucket.
        assert!(matches!(
            EntryStore::from_json(r#"{"1": ["a", "b", "c", ["x"], []]}"#),
            Err(KanshuError::Validation(_))
        ));
        // Top level must be an object.
        assert!(matches!(EntryStore::from_json("[1, 2]"), Err(KanshuError::Validation(_))));
    }
}
