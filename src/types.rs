//! Problem and solution types for the knapsack solver.

use crate::config::ConfigError;

/// A single knapsack item: what it is worth and how much room it takes.
///
/// Values and sizes are non-negative reals supplied by the caller; the
/// solver never modifies them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Value contributed when the item is packed.
    pub value: f64,
    /// Capacity consumed when the item is packed.
    pub size: f64,
}

impl Item {
    pub fn new(value: f64, size: f64) -> Self {
        Self { value, size }
    }
}

/// A knapsack problem instance: an ordered item list and a capacity.
///
/// Immutable for the duration of a solve.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::{Instance, Item};
///
/// let instance = Instance::new(vec![Item::new(60.0, 10.0), Item::new(100.0, 20.0)], 25.0);
/// assert_eq!(instance.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    /// The items, index-addressed; packings refer to items by position.
    pub items: Vec<Item>,
    /// Maximum total size of a feasible packing.
    pub capacity: f64,
}

impl Instance {
    pub fn new(items: Vec<Item>, capacity: f64) -> Self {
        Self { items, capacity }
    }

    /// Builds an instance from parallel value/size arrays.
    ///
    /// Rejects mismatched lengths before any solving starts.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapsack_anneal::Instance;
    ///
    /// let instance = Instance::from_parallel(&[60.0, 100.0], &[10.0, 20.0], 25.0).unwrap();
    /// assert_eq!(instance.len(), 2);
    ///
    /// assert!(Instance::from_parallel(&[60.0], &[10.0, 20.0], 25.0).is_err());
    /// ```
    pub fn from_parallel(values: &[f64], sizes: &[f64], capacity: f64) -> Result<Self, ConfigError> {
        if values.len() != sizes.len() {
            return Err(ConfigError::LengthMismatch {
                values: values.len(),
                sizes: sizes.len(),
            });
        }
        let items = values
            .iter()
            .zip(sizes)
            .map(|(&value, &size)| Item { value, size })
            .collect();
        Ok(Self { items, capacity })
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A candidate selection: one inclusion flag per item.
///
/// The flag count always equals the instance's item count; every packing
/// produced by the solver upholds this. Packings are replaced wholesale
/// when a move is accepted, never mutated in place, so a rejected
/// candidate can be discarded without touching the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Packing {
    bits: Vec<bool>,
}

impl Packing {
    /// Packing with every item included. This is the solve's initial state.
    pub fn all_included(n: usize) -> Self {
        Self {
            bits: vec![true; n],
        }
    }

    /// Packing with no item included.
    pub fn none_included(n: usize) -> Self {
        Self {
            bits: vec![false; n],
        }
    }

    /// Packing from explicit inclusion flags.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of flags (equals the instance's item count).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether the item at `index` is included.
    pub fn is_included(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// How many items are included.
    pub fn included_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// The inclusion flags, in item order.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapsack_anneal::Packing;
    ///
    /// let packing = Packing::from_bits(vec![true, false]);
    /// assert_eq!(packing.bits(), &[true, false]);
    /// ```
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// A copy of this packing with the flag at `index` flipped.
    pub fn toggled(&self, index: usize) -> Self {
        let mut bits = self.bits.clone();
        bits[index] = !bits[index];
        Self { bits }
    }

    /// Number of positions at which two packings differ.
    pub fn hamming_distance(&self, other: &Packing) -> usize {
        self.bits
            .iter()
            .zip(&other.bits)
            .filter(|(a, b)| a != b)
            .count()
    }
}

/// Value and size of a packing, recomputed on demand.
///
/// Never stored independently of the packing it describes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Total value of the included items, forced to `0.0` when the packing
    /// exceeds capacity.
    pub total_value: f64,
    /// True total size of the included items, reported even over capacity.
    pub total_size: f64,
}
