//! Fixed-size per-dimension storage.
//!
//! Backed by an array indexed in `DimensionId::ALL` order, so iteration is
//! deterministic and no entry can be missing. Serializes as a map keyed by
//! dimension code (`{"D1": .., "D2": ..}`).

use serde::de::Error as DeError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use super::taxonomy::{DimensionId, DIMENSION_COUNT};

/// One value per dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionMap<T>([T; DIMENSION_COUNT]);

impl<T> DimensionMap<T> {
    /// Creates a map from values in `DimensionId::ALL` order.
    pub const fn from_array(values: [T; DIMENSION_COUNT]) -> Self {
        Self(values)
    }

    /// Builds a map by evaluating `f` for each dimension.
    pub fn from_fn(mut f: impl FnMut(DimensionId) -> T) -> Self {
        Self(DimensionId::ALL.map(&mut f))
    }

    /// Iterates `(dimension, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (DimensionId, &T)> {
        DimensionId::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterates values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Applies `f` to every value.
    pub fn map<U>(&self, mut f: impl FnMut(DimensionId, &T) -> U) -> DimensionMap<U> {
        DimensionMap::from_fn(|d| f(d, &self.0[d.index()]))
    }

    /// Returns the underlying array.
    pub fn as_array(&self) -> &[T; DIMENSION_COUNT] {
        &self.0
    }
}

impl<T: Copy> DimensionMap<T> {
    /// Same value for every dimension.
    pub const fn splat(value: T) -> Self {
        Self([value; DIMENSION_COUNT])
    }
}

impl DimensionMap<f64> {
    /// Sum of all values.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl<T> Index<DimensionId> for DimensionMap<T> {
    type Output = T;

    fn index(&self, dimension: DimensionId) -> &T {
        &self.0[dimension.index()]
    }
}

impl<T> IndexMut<DimensionId> for DimensionMap<T> {
    fn index_mut(&mut self, dimension: DimensionId) -> &mut T {
        &mut self.0[dimension.index()]
    }
}

impl<T: Serialize> Serialize for DimensionMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DIMENSION_COUNT))?;
        for (dimension, value) in self.iter() {
            map.serialize_entry(dimension.code(), value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DimensionMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: BTreeMap<String, T> = BTreeMap::deserialize(deserializer)?;

        let mut by_dimension: BTreeMap<DimensionId, T> = BTreeMap::new();
        for (code, value) in raw {
            let dimension: DimensionId = code.parse().map_err(D::Error::custom)?;
            by_dimension.insert(dimension, value);
        }

        let mut values = Vec::with_capacity(DIMENSION_COUNT);
        for dimension in DimensionId::ALL {
            match by_dimension.remove(&dimension) {
                Some(value) => values.push(value),
                None => {
                    return Err(D::Error::custom(format!(
                        "missing value for dimension {}",
                        dimension
                    )))
                }
            }
        }

        let values: [T; DIMENSION_COUNT] = values
            .try_into()
            .map_err(|_| D::Error::custom("expected exactly 8 dimension entries"))?;
        Ok(Self(values))
    }
}
