//! Stops: the depot and the customers a tour must visit.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

/// Quantity of goods a stop requires.
pub type Demand = u32;

/// Identifier of a depot or customer location, e.g. `"PV1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    /// Wrap an identifier.
    ///
    /// # Examples
    /// ```
    /// use robust_route_core::StopId;
    ///
    /// let id = StopId::new("PV1");
    /// assert_eq!(id.as_str(), "PV1");
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StopId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StopId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Whether a stop is the depot or a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopRole {
    /// Start and end of every tour.
    Depot,
    /// Location visited exactly once per tour.
    Customer,
}

/// A registered location with its demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Unique identifier.
    pub id: StopId,
    /// Depot or customer.
    pub role: StopRole,
    /// Goods required at this stop; always zero for the depot.
    pub demand: Demand,
}

/// Read-only registry of stops with a designated depot.
///
/// Customers keep their registration order, which fixes the order tours are
/// enumerated in.
///
/// # Examples
/// ```
/// use robust_route_core::{StopId, StopRegistry};
///
/// # fn main() -> Result<(), robust_route_core::ConfigurationError> {
/// let registry = StopRegistry::new(
///     StopId::new("A"),
///     [("A".into(), 0), ("PV1".into(), 2), ("PV2".into(), 1)],
/// )?;
/// assert_eq!(registry.customer_count(), 2);
/// assert_eq!(registry.demand(&StopId::new("PV1")), Some(2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRegistry {
    depot: StopId,
    stops: Vec<Stop>,
    index: HashMap<StopId, usize>,
}

impl StopRegistry {
    /// Validate and construct a registry from `(id, demand)` pairs.
    ///
    /// The depot must appear among the pairs with zero demand; every other
    /// entry becomes a customer.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::DuplicateStop`] for repeated identifiers,
    /// [`ConfigurationError::MissingDepot`] when the depot is absent and
    /// [`ConfigurationError::DepotDemand`] when the depot has demand.
    pub fn new<I>(depot: StopId, demands: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (StopId, Demand)>,
    {
        let mut stops = Vec::new();
        let mut index = HashMap::new();
        for (id, demand) in demands {
            if index.contains_key(&id) {
                return Err(ConfigurationError::DuplicateStop { stop: id });
            }
            let role = if id == depot {
                if demand != 0 {
                    return Err(ConfigurationError::DepotDemand { depot: id, demand });
                }
                StopRole::Depot
            } else {
                StopRole::Customer
            };
            index.insert(id.clone(), stops.len());
            stops.push(Stop { id, role, demand });
        }
        if !index.contains_key(&depot) {
            return Err(ConfigurationError::MissingDepot { depot });
        }
        Ok(Self {
            depot,
            stops,
            index,
        })
    }

    /// Identifier of the depot.
    #[must_use]
    pub const fn depot_id(&self) -> &StopId {
        &self.depot
    }

    /// Every registered stop in registration order, depot included.
    #[must_use]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Customer stops in registration order.
    pub fn customers(&self) -> impl Iterator<Item = &Stop> + '_ {
        self.stops
            .iter()
            .filter(|stop| stop.role == StopRole::Customer)
    }

    /// Number of customer stops.
    #[must_use]
    pub fn customer_count(&self) -> usize {
        self.customers().count()
    }

    /// Look up a stop by identifier.
    #[must_use]
    pub fn get(&self, id: &StopId) -> Option<&Stop> {
        self.index.get(id).and_then(|&position| self.stops.get(position))
    }

    /// Demand registered for `id`, if the stop exists.
    #[must_use]
    pub fn demand(&self, id: &StopId) -> Option<Demand> {
        self.get(id).map(|stop| stop.demand)
    }
}
