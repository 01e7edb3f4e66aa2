//! Identifier kinds of the DICOM hierarchy and the levels of a DICOMweb path.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A kind of identifier in the DICOM hierarchy.
///
/// Variants are declared from shallowest to deepest, so the derived [Ord]
/// is the hierarchy order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IdentifierKind {
    #[serde(rename = "study_id")]
    Study,
    #[serde(rename = "series_id")]
    Series,
    #[serde(rename = "instance_id")]
    Instance,
    #[serde(rename = "frame_id")]
    Frame,
}

impl IdentifierKind {
    /// All kinds, shallowest first.
    pub const ALL: [IdentifierKind; 4] = [Self::Study, Self::Series, Self::Instance, Self::Frame];

    /// The path segment which precedes a value of this kind, e.g. `studies`.
    pub fn path_segment(self) -> &'static str {
        self.level().as_str()
    }

    /// The level of a path which ends in a value of this kind.
    pub fn level(self) -> Level {
        match self {
            Self::Study => Level::Studies,
            Self::Series => Level::Series,
            Self::Instance => Level::Instances,
            Self::Frame => Level::Frames,
        }
    }
}

impl Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Study => "study",
            Self::Series => "series",
            Self::Instance => "instance",
            Self::Frame => "frame",
        })
    }
}

/// The deepest identifier kind present, or [Level::Root] if there are none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Root,
    Studies,
    Series,
    Instances,
    Frames,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Studies => "studies",
            Self::Series => "series",
            Self::Instances => "instances",
            Self::Frames => "frames",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown level name: \"{0}\"")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "root" => Ok(Self::Root),
            "studies" => Ok(Self::Studies),
            "series" => Ok(Self::Series),
            "instances" => Ok(Self::Instances),
            "frames" => Ok(Self::Frames),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

/// Identifier values keyed by [IdentifierKind], iterated in hierarchy order.
///
/// Values are opaque (usually UIDs, or a frame number) and are not validated.
/// Maps decoded from a path always hold a prefix of
/// `[study, series, instance, frame]`; maps assembled by hand might not,
/// see [IdentifierMap::is_hierarchical].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentifierMap(BTreeMap<IdentifierKind, String>);

impl IdentifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: IdentifierKind, value: impl Into<String>) -> Option<String> {
        self.0.insert(kind, value.into())
    }

    pub fn get(&self, kind: IdentifierKind) -> Option<&str> {
        self.0.get(&kind).map(String::as_str)
    }

    pub fn contains(&self, kind: IdentifierKind) -> bool {
        self.0.contains_key(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IdentifierKind, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Whether the present kinds form a prefix of `[study, series, instance, frame]`,
    /// i.e. no kind is present without all of its ancestors.
    pub fn is_hierarchical(&self) -> bool {
        IdentifierKind::ALL
            .iter()
            .take(self.0.len())
            .all(|kind| self.0.contains_key(kind))
    }
}

impl<V: Into<String>> FromIterator<(IdentifierKind, V)> for IdentifierMap {
    fn from_iter<T: IntoIterator<Item = (IdentifierKind, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<V: Into<String>, const N: usize> From<[(IdentifierKind, V); N]> for IdentifierMap {
    fn from(value: [(IdentifierKind, V); N]) -> Self {
        value.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    use IdentifierKind::*;

    #[rstest]
    #[case(Study, "studies")]
    #[case(Series, "series")]
    #[case(Instance, "instances")]
    #[case(Frame, "frames")]
    fn test_path_segment(#[case] kind: IdentifierKind, #[case] expected: &str) {
        assert_eq!(kind.path_segment(), expected);
        assert_eq!(expected.parse::<Level>().unwrap(), kind.level());
    }

    #[test]
    fn test_parse_unknown_level() {
        assert_eq!("asdf".parse::<Level>(), Err(UnknownLevel("asdf".to_string())));
        assert_eq!("root".parse::<Level>(), Ok(Level::Root));
    }

    #[test]
    fn test_iterates_in_hierarchy_order() {
        let ids = IdentifierMap::from([(Frame, "4"), (Study, "1"), (Instance, "3"), (Series, "2")]);
        let kinds: Vec<_> = ids.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, IdentifierKind::ALL);
    }

    #[rstest]
    #[case(IdentifierMap::new(), true)]
    #[case(IdentifierMap::from([(Study, "1")]), true)]
    #[case(IdentifierMap::from([(Study, "1"), (Series, "2"), (Instance, "3")]), true)]
    #[case(IdentifierMap::from([(Frame, "4")]), false)]
    #[case(IdentifierMap::from([(Study, "1"), (Instance, "3")]), false)]
    fn test_is_hierarchical(#[case] ids: IdentifierMap, #[case] expected: bool) {
        assert_eq!(ids.is_hierarchical(), expected)
    }

    #[test]
    fn test_serialize_with_id_keys() {
        let ids = IdentifierMap::from([(Study, "1"), (Series, "2")]);
        let actual = serde_json::to_value(&ids).unwrap();
        assert_eq!(actual, serde_json::json!({"study_id": "1", "series_id": "2"}));
    }
}
