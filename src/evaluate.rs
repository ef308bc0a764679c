//! Packing evaluation.

use crate::types::{Evaluation, Instance, Packing};

/// Computes the total value and size of a packing.
///
/// An over-capacity packing keeps its true `total_size` but has its
/// `total_value` forced to `0.0`: it is maximally unattractive to the
/// acceptance rule yet remains a valid state the search can keep
/// perturbing. Pure and total over well-formed inputs, O(n).
///
/// # Examples
///
/// ```
/// use knapsack_anneal::{evaluate, Instance, Item, Packing};
///
/// let instance = Instance::new(vec![Item::new(60.0, 10.0), Item::new(100.0, 20.0)], 25.0);
///
/// let within = evaluate(&Packing::from_bits(vec![true, false]), &instance);
/// assert_eq!(within.total_value, 60.0);
/// assert_eq!(within.total_size, 10.0);
///
/// // Both items overflow the capacity: value zeroed, true size reported.
/// let over = evaluate(&Packing::all_included(2), &instance);
/// assert_eq!(over.total_value, 0.0);
/// assert_eq!(over.total_size, 30.0);
/// ```
pub fn evaluate(packing: &Packing, instance: &Instance) -> Evaluation {
    let mut total_value = 0.0;
    let mut total_size = 0.0;

    for (index, item) in instance.items.iter().enumerate() {
        if packing.is_included(index) {
            total_value += item.value;
            total_size += item.size;
        }
    }

    if total_size > instance.capacity {
        total_value = 0.0;
    }

    Evaluation {
        total_value,
        total_size,
    }
}
