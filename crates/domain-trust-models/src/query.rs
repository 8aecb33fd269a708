//! Query-string mapping for filter records.
//!
//! # Design
//! - Each filter lists its parameters in a hand-written table
//!   ([`QueryFilter::query_entries`]): query key, omit policy and a borrowed
//!   value. Fields left out of the table never reach the query string.
//! - Embedded filters are flattened into the parent's parameter set; entries
//!   listed after the embedded block overwrite keys it produced.
//! - Output is sorted by key so identical filters always encode identically.

use std::collections::BTreeMap;
use std::net::IpAddr;

use chrono::{DateTime, SecondsFormat, Utc};
use url::form_urlencoded;

/// Whether a parameter is dropped when it holds the zero value of its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Omit {
    /// Always emitted, even when empty.
    Never,
    /// Skipped for empty strings, zero numbers, `false`, and absent times or addresses.
    Empty,
}

/// Borrowed view of one filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryValue<'a> {
    /// Free-form text.
    Text(&'a str),
    /// Boolean flag rendered as `true`/`false`.
    Bool(bool),
    /// Unsigned number rendered in decimal.
    Unsigned(u64),
    /// Optional timestamp rendered as RFC 3339.
    Time(Option<&'a DateTime<Utc>>),
    /// Optional network address.
    Addr(Option<&'a IpAddr>),
}

impl QueryValue<'_> {
    /// Returns `true` when the value is the zero value of its type.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Bool(flag) => !*flag,
            Self::Unsigned(number) => *number == 0,
            Self::Time(time) => time.is_none(),
            Self::Addr(addr) => addr.is_none(),
        }
    }

    /// Render the value the way it appears in a query string (before encoding).
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => (*text).to_string(),
            Self::Bool(flag) => flag.to_string(),
            Self::Unsigned(number) => number.to_string(),
            Self::Time(time) => time
                .map(|time| time.to_rfc3339_opts(SecondsFormat::Secs, true))
                .unwrap_or_default(),
            Self::Addr(addr) => addr.map(ToString::to_string).unwrap_or_default(),
        }
    }
}

impl<'a> From<&'a String> for QueryValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl<'a> From<&'a str> for QueryValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for QueryValue<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for QueryValue<'_> {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl<'a> From<&'a Option<DateTime<Utc>>> for QueryValue<'a> {
    fn from(value: &'a Option<DateTime<Utc>>) -> Self {
        Self::Time(value.as_ref())
    }
}

impl<'a> From<&'a Option<IpAddr>> for QueryValue<'a> {
    fn from(value: &'a Option<IpAddr>) -> Self {
        Self::Addr(value.as_ref())
    }
}

/// One row of a filter's mapping table.
pub enum QueryEntry<'a> {
    /// A field that maps onto a query parameter.
    Param {
        /// Query parameter name.
        key: &'static str,
        /// Zero-value policy.
        omit: Omit,
        /// Current field value.
        value: QueryValue<'a>,
    },
    /// An embedded filter whose own table is flattened into the parent.
    Embedded(&'a dyn QueryFilter),
}

impl<'a> QueryEntry<'a> {
    /// Parameter that is always emitted.
    pub fn param(key: &'static str, value: impl Into<QueryValue<'a>>) -> Self {
        Self::Param {
            key,
            omit: Omit::Never,
            value: value.into(),
        }
    }

    /// Parameter that is dropped when its value is zero.
    pub fn omit_empty(key: &'static str, value: impl Into<QueryValue<'a>>) -> Self {
        Self::Param {
            key,
            omit: Omit::Empty,
            value: value.into(),
        }
    }

    /// Flatten another filter into this one.
    pub fn embedded(filter: &'a dyn QueryFilter) -> Self {
        Self::Embedded(filter)
    }
}

/// Records whose fields become query parameters on list requests.
pub trait QueryFilter {
    /// The mapping table for this filter, in declaration order.
    fn query_entries(&self) -> Vec<QueryEntry<'_>>;
}

/// Collect the parameters of `filter` into a key-sorted map.
#[must_use]
pub fn query_pairs<F: QueryFilter + ?Sized>(filter: &F) -> BTreeMap<&'static str, String> {
    let mut pairs = BTreeMap::new();
    collect_pairs(filter.query_entries(), &mut pairs);
    pairs
}

fn collect_pairs(entries: Vec<QueryEntry<'_>>, pairs: &mut BTreeMap<&'static str, String>) {
    for entry in entries {
        match entry {
            QueryEntry::Embedded(inner) => collect_pairs(inner.query_entries(), pairs),
            QueryEntry::Param { key, omit, value } => {
                if omit == Omit::Empty && value.is_zero() {
                    continue;
                }
                pairs.insert(key, value.render());
            }
        }
    }
}

/// Form-urlencode a sorted parameter map.
#[must_use]
pub fn encode_pairs(pairs: &BTreeMap<&'static str, String>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Serialize a filter into a deterministic, URL-encoded query string.
#[must_use]
pub fn to_query_string<F: QueryFilter + ?Sized>(filter: &F) -> String {
    encode_pairs(&query_pairs(filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::net::Ipv4Addr;

    #[derive(Default)]
    struct Embedded {
        name: String,
    }

    impl QueryFilter for Embedded {
        fn query_entries(&self) -> Vec<QueryEntry<'_>> {
            vec![QueryEntry::omit_empty("name", &self.name)]
        }
    }

    #[derive(Default)]
    struct Outer {
        inner: Embedded,
        note: String,
        count: u64,
        strict: String,
        since: Option<DateTime<Utc>>,
        peer: Option<IpAddr>,
        active: bool,
    }

    impl QueryFilter for Outer {
        fn query_entries(&self) -> Vec<QueryEntry<'_>> {
            // `note` is deliberately absent from the table.
            vec![
                QueryEntry::embedded(&self.inner),
                QueryEntry::omit_empty("count", self.count),
                QueryEntry::param("strict", &self.strict),
                QueryEntry::omit_empty("since", &self.since),
                QueryEntry::omit_empty("peer", &self.peer),
                QueryEntry::omit_empty("active", self.active),
            ]
        }
    }

    struct Flat {
        name: String,
    }

    impl QueryFilter for Flat {
        fn query_entries(&self) -> Vec<QueryEntry<'_>> {
            vec![QueryEntry::omit_empty("name", &self.name)]
        }
    }

    #[test]
    fn fields_outside_the_table_never_appear() {
        let filter = Outer {
            note: "hidden".into(),
            ..Outer::default()
        };
        let query = to_query_string(&filter);
        assert!(!query.contains("note"));
        assert!(!query.contains("hidden"));
    }

    #[test]
    fn zero_values_are_dropped_only_when_omit_empty() {
        let query = to_query_string(&Outer::default());
        assert_eq!(query, "strict=");
    }

    #[test]
    fn non_zero_values_are_included_and_encoded() {
        let filter = Outer {
            count: 25,
            strict: "a b&c".into(),
            active: true,
            ..Outer::default()
        };
        assert_eq!(
            to_query_string(&filter),
            "active=true&count=25&strict=a+b%26c"
        );
    }

    #[test]
    fn embedded_filters_flatten_like_flat_ones() {
        let outer = query_pairs(&Outer {
            inner: Embedded { name: "x".into() },
            ..Outer::default()
        });
        let flat = query_pairs(&Flat { name: "x".into() });
        assert_eq!(outer.get("name"), flat.get("name"));
        assert_eq!(outer.get("name").map(String::as_str), Some("x"));
    }

    #[test]
    fn times_render_as_rfc3339_seconds() {
        let since = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).single();
        let filter = Outer {
            since,
            ..Outer::default()
        };
        let pairs = query_pairs(&filter);
        assert_eq!(
            pairs.get("since").map(String::as_str),
            Some("2024-03-09T14:05:00Z")
        );
    }

    #[test]
    fn addresses_render_when_present() {
        let filter = Outer {
            peer: Some(IpAddr::V4(Ipv4Addr::new(9, 9, 9, 9))),
            ..Outer::default()
        };
        let pairs = query_pairs(&filter);
        assert_eq!(pairs.get("peer").map(String::as_str), Some("9.9.9.9"));
    }

    #[test]
    fn output_is_sorted_by_key() {
        let filter = Outer {
            inner: Embedded { name: "z".into() },
            count: 1,
            active: true,
            ..Outer::default()
        };
        assert_eq!(
            to_query_string(&filter),
            "active=true&count=1&name=z&strict="
        );
    }

    #[test]
    fn zero_checks_cover_every_kind() {
        assert!(QueryValue::Text("").is_zero());
        assert!(QueryValue::Bool(false).is_zero());
        assert!(QueryValue::Unsigned(0).is_zero());
        assert!(QueryValue::Time(None).is_zero());
        assert!(QueryValue::Addr(None).is_zero());
        assert!(!QueryValue::Text("x").is_zero());
    }
}
