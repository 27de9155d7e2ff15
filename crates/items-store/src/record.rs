//! Record and identifier types.
//!
//! A [`Record`] is an arbitrary JSON object with one reserved field,
//! [`ID_FIELD`]. Every other field is caller-defined and stored as-is.
//! Key order is preserved (`serde_json` is built with `preserve_order`)
//! so records serialize in the order their fields were written.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the reserved identifier field on every record.
pub const ID_FIELD: &str = "id";

/// Integer identifier of a record within the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub i64);

impl ItemId {
    /// The identifier handed to the first record of an empty collection.
    pub const FIRST: Self = Self(1);

    /// Return the inner integer value.
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// The identifier following this one, or `None` on overflow.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Read the identifier at the start of a URL path segment.
    ///
    /// Leading whitespace is skipped, then an optional sign, then the
    /// longest run of digits (hexadecimal after a `0x` prefix). Anything
    /// after the digits is ignored, so `"1abc"` and `"2.5"` read as 1 and
    /// 2. Returns `None` when no digit follows, or the value overflows.
    pub fn parse_leading(raw: &str) -> Option<Self> {
        let rest = raw.trim_start();
        let (negative, rest) = match rest.strip_prefix('-') {
            Some(unsigned) => (true, unsigned),
            None => (false, rest.strip_prefix('+').unwrap_or(rest)),
        };
        let (radix, rest) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            Some(hex) => (16, hex),
            None => (10, rest),
        };

        let end = rest
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(rest.len());
        let digits = rest.get(..end).filter(|digits| !digits.is_empty())?;
        let magnitude = i64::from_str_radix(digits, radix).ok()?;

        if negative {
            magnitude.checked_neg().map(Self)
        } else {
            Some(Self(magnitude))
        }
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field mapping supplied by a caller (create body or update patch).
pub type Fields = Map<String, Value>;

/// One stored item: an ordered JSON object carrying an `id` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Fields);

impl Record {
    /// Build a record from an identifier and caller fields.
    ///
    /// The identifier is written first. A caller-supplied `id` field is
    /// dropped in favour of `id`.
    pub fn with_id(id: ItemId, fields: Fields) -> Self {
        let mut map = Map::with_capacity(fields.len().saturating_add(1));
        map.insert(ID_FIELD.to_owned(), Value::from(id.into_inner()));
        map.extend(fields.into_iter().filter(|(key, _)| key != ID_FIELD));
        Self(map)
    }

    /// The record's identifier, if its `id` field holds an integer.
    pub fn id(&self) -> Option<ItemId> {
        self.0.get(ID_FIELD).and_then(Value::as_i64).map(ItemId)
    }

    /// Shallow-merge `patch` into this record. Keys in `patch` win,
    /// including `id`.
    pub fn merge(&mut self, patch: Fields) {
        for (key, value) in patch {
            self.0.insert(key, value);
        }
    }

    /// Borrow the record's fields.
    pub const fn fields(&self) -> &Fields {
        &self.0
    }
}

impl From<Fields> for Record {
    fn from(fields: Fields) -> Self {
        Self(fields)
    }
}
