//! # Inventory Store
//!
//! The in-memory, insertion-ordered collection of [`Part`] records for one session.
//!
//! ## Overview
//!
//! [`Inventory`] is a plain owned value: reads take `&self`, mutations take
//! `&mut self`, and every mutation either fully applies or returns an error
//! with the inventory untouched. It knows nothing about channels or tasks;
//! the [`session`](crate::session) module hosts it behind an actor.
//!
//! ## Identity
//!
//! `part_id` is unique within an inventory. [`Inventory::add_part`] rejects a
//! second part with the same id, so update and delete always address exactly
//! one record.
//!
//! ## Usage
//!
//! ```rust
//! use spare_parts::inventory::Inventory;
//! use spare_parts::model::{Category, Currency, Part, PartUpdate};
//!
//! let mut inventory = Inventory::new(Currency::Pkr);
//! inventory.add_part(Part::new("P1", "Brake Pad", Category::Brakes, 4, 1200.0)).unwrap();
//!
//! assert_eq!(inventory.search("brake").len(), 1);
//! inventory.update_part("P1", PartUpdate::quantity(10)).unwrap();
//! assert_eq!(inventory.compute_total_value().amount, 12000.0);
//! ```

pub mod error;

pub use error::*;

use crate::model::{Currency, Money, Part, PartId, PartUpdate};

/// An ordered collection of parts priced in a single currency.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    parts: Vec<Part>,
    currency: Currency,
}

impl Inventory {
    pub fn new(currency: Currency) -> Self {
        Self {
            parts: Vec::new(),
            currency,
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Appends `part` after trimming and validating it, returning the stored id.
    ///
    /// # Errors
    /// - [`PartError::Validation`] if `part_id` or `name` is blank
    /// - [`PartError::InvalidNumber`] if `price` is negative or not finite, or
    ///   the line or inventory value would overflow
    /// - [`PartError::DuplicateId`] if the id is already present
    pub fn add_part(&mut self, part: Part) -> Result<PartId, PartError> {
        let part = part.trimmed();
        require("part_id", part.part_id.as_str())?;
        require("name", &part.name)?;
        check_price(part.price)?;
        if self.position(part.part_id.as_str()).is_some() {
            return Err(PartError::DuplicateId(part.part_id.to_string()));
        }
        self.check_value(&part, None)?;
        let id = part.part_id.clone();
        self.parts.push(part);
        Ok(id)
    }

    /// Every part, in insertion order.
    pub fn list_inventory(&self) -> &[Part] {
        &self.parts
    }

    /// Ids of every part, in insertion order.
    pub fn part_ids(&self) -> Vec<PartId> {
        self.parts.iter().map(|p| p.part_id.clone()).collect()
    }

    pub fn get_part(&self, id: &str) -> Option<&Part> {
        self.position(id).map(|idx| &self.parts[idx])
    }

    /// Sum of `quantity × price` over all parts; zero when empty.
    pub fn compute_total_value(&self) -> Money {
        let amount = self.parts.iter().map(Part::line_value).sum();
        Money::new(amount, self.currency)
    }

    /// Every part together with their total, taken at the same moment.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            parts: self.parts.clone(),
            total: self.compute_total_value(),
        }
    }

    /// Case-insensitive substring search across every field of every part.
    ///
    /// A blank query matches everything. Otherwise the query is matched as
    /// given, surrounding spaces included. Results keep insertion order.
    pub fn search(&self, query: &str) -> Vec<Part> {
        if query.trim().is_empty() {
            return self.parts.clone();
        }
        let needle = query.to_lowercase();
        self.parts
            .iter()
            .filter(|p| p.searchable_fields().iter().any(|f| f.contains(&needle)))
            .cloned()
            .collect()
    }

    /// Replaces the mutable fields of the part with this id.
    ///
    /// Returns the updated part. On error nothing changes.
    pub fn update_part(&mut self, id: &str, update: PartUpdate) -> Result<Part, PartError> {
        let idx = self
            .position(id)
            .ok_or_else(|| PartError::NotFound(id.to_string()))?;
        let mut candidate = self.parts[idx].clone();
        candidate.apply(update.trimmed());
        require("name", &candidate.name)?;
        check_price(candidate.price)?;
        self.check_value(&candidate, Some(idx))?;
        self.parts[idx] = candidate.clone();
        Ok(candidate)
    }

    /// Removes and returns the part with this id.
    pub fn delete_part(&mut self, id: &str) -> Result<Part, PartError> {
        let idx = self
            .position(id)
            .ok_or_else(|| PartError::NotFound(id.to_string()))?;
        Ok(self.parts.remove(idx))
    }

    fn position(&self, id: &str) -> Option<usize> {
        let id = id.trim();
        self.parts.iter().position(|p| p.part_id.as_str() == id)
    }

    /// Rejects `part` if its line value, or the inventory total with it in
    /// place of the part at `replacing`, is not a finite number.
    fn check_value(&self, part: &Part, replacing: Option<usize>) -> Result<(), PartError> {
        let line = part.line_value();
        if !line.is_finite() {
            return Err(PartError::InvalidNumber {
                field: "line value",
                value: line.to_string(),
            });
        }
        let others: f64 = self
            .parts
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != replacing)
            .map(|(_, p)| p.line_value())
            .sum();
        let total = others + line;
        if !total.is_finite() {
            return Err(PartError::InvalidNumber {
                field: "total",
                value: total.to_string(),
            });
        }
        Ok(())
    }
}

/// The full listing and its total value, read in one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub parts: Vec<Part>,
    pub total: Money,
}

fn require(field: &'static str, value: &str) -> Result<(), PartError> {
    if value.trim().is_empty() {
        Err(PartError::Validation { field })
    } else {
        Ok(())
    }
}

fn check_price(price: f64) -> Result<(), PartError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(PartError::InvalidNumber {
            field: "price",
            value: price.to_string(),
        })
    }
}
