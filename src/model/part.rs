/// Represents a spare part held in the inventory.
///
/// # Inventory Store
/// Parts are owned by an [`Inventory`](crate::inventory::Inventory) and keyed by
/// their user-supplied [`PartId`]. The id never changes after creation; every
/// other field can be replaced through a [`PartUpdate`].
///
/// Loosely typed input (a form where every field is text) enters through
/// [`PartForm`], which is the only place numbers are parsed from strings.
use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::str::FromStr;

use crate::inventory::PartError;

/// Type-safe identifier for Parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(pub String);

impl PartId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PartId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PartId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Part categories offered by the add and update forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Engine,
    Brakes,
    Suspension,
    Electrical,
    Body,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Engine,
        Category::Brakes,
        Category::Suspension,
        Category::Electrical,
        Category::Body,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Engine => "Engine",
            Category::Brakes => "Brakes",
            Category::Suspension => "Suspension",
            Category::Electrical => "Electrical",
            Category::Body => "Body",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = PartError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PartError::UnknownCategory(wanted.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub part_id: PartId,
    #[serde(default)]
    pub part_number: String,
    pub name: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub supplier: String,
}

impl Part {
    /// Creates a new Part with an empty part number and supplier.
    ///
    /// # Arguments
    /// * `part_id` - User-supplied primary key
    /// * `name` - Human-readable description
    /// * `category` - One of the fixed [`Category`] values
    /// * `quantity` - Units in stock
    /// * `price` - Unit price in the inventory's currency
    pub fn new(
        part_id: impl Into<PartId>,
        name: impl Into<String>,
        category: Category,
        quantity: u32,
        price: f64,
    ) -> Self {
        Self {
            part_id: part_id.into(),
            part_number: String::new(),
            name: name.into(),
            category,
            quantity,
            price,
            supplier: String::new(),
        }
    }

    pub fn with_part_number(mut self, part_number: impl Into<String>) -> Self {
        self.part_number = part_number.into();
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = supplier.into();
        self
    }

    /// Stock value of this line: `quantity × price`.
    pub fn line_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }

    /// Lowercased string form of every field, in declaration order.
    pub(crate) fn searchable_fields(&self) -> [String; 7] {
        [
            self.part_id.as_str().to_lowercase(),
            self.part_number.to_lowercase(),
            self.name.to_lowercase(),
            self.category.label().to_lowercase(),
            self.quantity.to_string(),
            self.price.to_string(),
            self.supplier.to_lowercase(),
        ]
    }

    /// Copy with surrounding whitespace stripped from every text field.
    pub(crate) fn trimmed(self) -> Self {
        Self {
            part_id: PartId::from(self.part_id.as_str().trim()),
            part_number: self.part_number.trim().to_string(),
            name: self.name.trim().to_string(),
            supplier: self.supplier.trim().to_string(),
            ..self
        }
    }

    /// Applies `update` in place. Callers validate first.
    pub(crate) fn apply(&mut self, update: PartUpdate) {
        if let Some(part_number) = update.part_number {
            self.part_number = part_number;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(supplier) = update.supplier {
            self.supplier = supplier;
        }
    }
}

// DTOs for Part updates. `part_id` is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartUpdate {
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub supplier: Option<String>,
}

impl PartUpdate {
    pub fn quantity(quantity: u32) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    pub(crate) fn trimmed(self) -> Self {
        let trim = |s: String| s.trim().to_string();
        Self {
            part_number: self.part_number.map(trim),
            name: self.name.map(trim),
            supplier: self.supplier.map(trim),
            ..self
        }
    }
}

/// A raw form submission where every field arrives as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartForm {
    pub part_id: String,
    pub part_number: String,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub supplier: String,
}

impl TryFrom<PartForm> for Part {
    type Error = PartError;

    /// Parses the numeric fields and the category.
    ///
    /// Empty quantity or price count as zero, matching the form defaults.
    /// An empty category maps to [`Category::Other`].
    fn try_from(form: PartForm) -> Result<Self, Self::Error> {
        let category = if form.category.trim().is_empty() {
            Category::default()
        } else {
            form.category.parse()?
        };
        Ok(Self {
            part_id: PartId(form.part_id.trim().to_string()),
            part_number: form.part_number.trim().to_string(),
            name: form.name.trim().to_string(),
            category,
            quantity: parse_quantity(&form.quantity)?,
            price: parse_price(&form.price)?,
            supplier: form.supplier.trim().to_string(),
        })
    }
}

fn parse_quantity(raw: &str) -> Result<u32, PartError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>().map_err(|_| PartError::InvalidNumber {
        field: "quantity",
        value: raw.to_string(),
    })
}

fn parse_price(raw: &str) -> Result<f64, PartError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(PartError::InvalidNumber {
            field: "price",
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PartForm {
        PartForm {
            part_id: " P1 ".into(),
            part_number: "06450-KVB-901".into(),
            name: "Brake Pad".into(),
            category: "brakes".into(),
            quantity: "4".into(),
            price: "1200.5".into(),
            supplier: "ACME".into(),
        }
    }

    #[test]
    fn test_form_parses_into_part() {
        let part = Part::try_from(form()).unwrap();
        assert_eq!(part.part_id, PartId::from("P1"));
        assert_eq!(part.category, Category::Brakes);
        assert_eq!(part.quantity, 4);
        assert_eq!(part.price, 1200.5);
    }

    #[test]
    fn test_form_rejects_non_numeric_quantity() {
        let bad = PartForm {
            quantity: "four".into(),
            ..form()
        };
        let err = Part::try_from(bad).unwrap_err();
        assert_eq!(
            err,
            PartError::InvalidNumber {
                field: "quantity",
                value: "four".into()
            }
        );
    }

    #[test]
    fn test_form_rejects_negative_and_nan_price() {
        for raw in ["-1", "NaN", "inf", "12abc"] {
            let bad = PartForm {
                price: raw.into(),
                ..form()
            };
            assert!(
                matches!(Part::try_from(bad), Err(PartError::InvalidNumber { field: "price", .. })),
                "price {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_form_blank_numbers_default_to_zero() {
        let blank = PartForm {
            quantity: "".into(),
            price: "  ".into(),
            category: "".into(),
            ..form()
        };
        let part = Part::try_from(blank).unwrap();
        assert_eq!(part.quantity, 0);
        assert_eq!(part.price, 0.0);
        assert_eq!(part.category, Category::Other);
    }

    #[test]
    fn test_unknown_category() {
        assert_eq!(
            "Tyres".parse::<Category>(),
            Err(PartError::UnknownCategory("Tyres".into()))
        );
        assert_eq!(" ELECTRICAL ".parse::<Category>(), Ok(Category::Electrical));
    }

    #[test]
    fn test_apply_keeps_unset_fields() {
        let mut part = Part::new("P1", "Piston", Category::Engine, 2, 50.0).with_supplier("ACME");
        part.apply(PartUpdate::quantity(10));
        assert_eq!(part.quantity, 10);
        assert_eq!(part.name, "Piston");
        assert_eq!(part.supplier, "ACME");
    }
}
