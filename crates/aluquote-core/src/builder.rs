//! # Line Item Composition
//!
//! Builds frozen line items from catalog selections.
//!
//! ## Rate Composition
//! ```text
//! product base rate ─┐
//! glass surcharge   ─┼──►  price_per_sqm (recomputed on EVERY selection
//! style surcharge   ─┘     change, then frozen into the line)
//!
//! colour            ───►  description only, never the rate
//! accessory         ───►  accessory_total = unit price × quantity
//! ```
//!
//! The composed line is a snapshot: once built, later edits to the
//! catalog records leave it untouched.

use uuid::Uuid;

use crate::error::{ValidationError, ValidationResult};
use crate::types::{
    Accessory, AccessoryLine, Colour, FittingLine, Glass, LineItem, Product, Style,
};

// =============================================================================
// Fitting Selection
// =============================================================================

/// The catalog picks for one fitting line.
///
/// Only the product is mandatory; every other pick is optional.
#[derive(Debug, Clone, Copy)]
pub struct FittingSelection<'a> {
    pub product: &'a Product,
    pub colour: Option<&'a Colour>,
    pub glass: Option<&'a Glass>,
    pub style: Option<&'a Style>,
    pub accessory: Option<&'a Accessory>,
}

impl<'a> FittingSelection<'a> {
    /// Selection with just a product, no options.
    pub fn product_only(product: &'a Product) -> Self {
        FittingSelection {
            product,
            colour: None,
            glass: None,
            style: None,
            accessory: None,
        }
    }

    /// The combined per-square-meter rate for this selection.
    ///
    /// Colour is deliberately absent: a colour pick only names the finish
    /// in the description.
    pub fn combined_rate(&self) -> f64 {
        self.product.price_per_sqm
            + self.glass.map_or(0.0, |g| g.price_per_sqm)
            + self.style.map_or(0.0, |s| s.price_per_sqm)
    }

    /// Comma-joined names of everything selected.
    pub fn description(&self) -> String {
        let mut parts = vec![self.product.name.clone()];
        if let Some(colour) = self.colour {
            parts.push(colour.name.clone());
        }
        if let Some(glass) = self.glass {
            parts.push(glass.name.clone());
        }
        if let Some(style) = self.style {
            parts.push(style.name.clone());
        }
        if let Some(accessory) = self.accessory {
            parts.push(accessory.name.clone());
        }
        parts.join(", ")
    }
}

// =============================================================================
// Builders
// =============================================================================

/// Builds a fitting line from a selection and measurements.
///
/// Dimensions are millimeters. Quantity must be at least 1 and both
/// dimensions must be non-zero.
pub fn build_fitting_line(
    selection: FittingSelection<'_>,
    width_mm: u32,
    height_mm: u32,
    quantity: u32,
) -> ValidationResult<LineItem> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    if width_mm == 0 {
        return Err(ValidationError::MustBePositive {
            field: "width".to_string(),
        });
    }
    if height_mm == 0 {
        return Err(ValidationError::MustBePositive {
            field: "height".to_string(),
        });
    }

    let accessory_total = selection
        .accessory
        .map_or(0.0, |a| a.price * quantity as f64);

    Ok(LineItem::Fitting(FittingLine {
        id: Uuid::new_v4().to_string(),
        kind: selection.product.kind,
        width_mm,
        height_mm,
        quantity,
        price_per_sqm: selection.combined_rate(),
        description: selection.description(),
        colour: selection.colour.map(|c| c.name.clone()),
        glass: selection.glass.map(|g| g.name.clone()),
        style: selection.style.map(|s| s.name.clone()),
        accessory: selection.accessory.map(|a| a.name.clone()),
        accessory_total,
    }))
}

/// Builds a standalone accessory line, freezing the unit price.
pub fn build_accessory_line(accessory: &Accessory, quantity: u32) -> ValidationResult<LineItem> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(LineItem::Accessory(AccessoryLine {
        id: Uuid::new_v4().to_string(),
        description: format!("{} - {}", accessory.name, accessory.accessory_type),
        quantity,
        unit_price: accessory.price,
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::line_total;
    use crate::types::{AccessoryCategory, FittingKind};

    fn test_product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Sliding Window".to_string(),
            kind: FittingKind::Window,
            price_per_sqm: 120.0,
            description: "Two-track sliding window".to_string(),
            material: "Aluminum".to_string(),
            color: "White".to_string(),
        }
    }

    fn test_glass() -> Glass {
        Glass {
            id: "g1".to_string(),
            name: "Tempered Clear".to_string(),
            glass_type: "tempered".to_string(),
            thickness: 6.0,
            price_per_sqm: 35.0,
            description: String::new(),
            specifications: String::new(),
        }
    }

    fn test_style() -> Style {
        Style {
            id: "s1".to_string(),
            name: "Slimline".to_string(),
            description: String::new(),
            category: "modern".to_string(),
            price_per_sqm: 18.5,
        }
    }

    fn test_colour() -> Colour {
        Colour {
            id: "co1".to_string(),
            name: "Anthracite Grey".to_string(),
            description: String::new(),
            hex_code: "#383E42".to_string(),
            price_per_sqm: 12.0,
        }
    }

    fn test_accessory() -> Accessory {
        Accessory {
            id: "a1".to_string(),
            name: "Chrome Handle".to_string(),
            description: String::new(),
            price: 45.0,
            accessory_type: "handle".to_string(),
            specifications: String::new(),
            category: AccessoryCategory::WindowAndDoor,
        }
    }

    #[test]
    fn test_combined_rate_adds_glass_and_style_only() {
        let product = test_product();
        let glass = test_glass();
        let style = test_style();
        let colour = test_colour();
        let selection = FittingSelection {
            product: &product,
            colour: Some(&colour),
            glass: Some(&glass),
            style: Some(&style),
            accessory: None,
        };
        // 120 + 35 + 18.5; the colour's 12.0 never enters the rate
        assert_eq!(selection.combined_rate(), 173.5);
    }

    #[test]
    fn test_description_joins_selected_names() {
        let product = test_product();
        let colour = test_colour();
        let accessory = test_accessory();
        let selection = FittingSelection {
            product: &product,
            colour: Some(&colour),
            glass: None,
            style: None,
            accessory: Some(&accessory),
        };
        assert_eq!(
            selection.description(),
            "Sliding Window, Anthracite Grey, Chrome Handle"
        );
    }

    #[test]
    fn test_build_fitting_line_freezes_accessory_total() {
        let product = test_product();
        let accessory = test_accessory();
        let mut selection = FittingSelection::product_only(&product);
        selection.accessory = Some(&accessory);

        let line = build_fitting_line(selection, 1000, 1000, 3).unwrap();
        match &line {
            LineItem::Fitting(f) => {
                assert_eq!(f.accessory_total, 135.0); // 45.00 × 3
                assert_eq!(f.accessory.as_deref(), Some("Chrome Handle"));
                assert_eq!(f.kind, FittingKind::Window);
            }
            _ => panic!("expected a fitting line"),
        }
        // 1.0 m² × 120 × 3 + 135 = 495
        assert_eq!(line_total(&line), 495.0);
    }

    #[test]
    fn test_build_fitting_line_rejects_zero_quantity() {
        let product = test_product();
        let selection = FittingSelection::product_only(&product);
        let err = build_fitting_line(selection, 1000, 1000, 0).unwrap_err();
        assert!(matches!(err, ValidationError::MustBePositive { .. }));
    }

    #[test]
    fn test_build_fitting_line_rejects_zero_dimensions() {
        let product = test_product();
        let selection = FittingSelection::product_only(&product);
        assert!(build_fitting_line(selection, 0, 1000, 1).is_err());
        assert!(build_fitting_line(selection, 1000, 0, 1).is_err());
    }

    #[test]
    fn test_build_accessory_line() {
        let accessory = test_accessory();
        let line = build_accessory_line(&accessory, 2).unwrap();
        match &line {
            LineItem::Accessory(a) => {
                assert_eq!(a.description, "Chrome Handle - handle");
                assert_eq!(a.unit_price, 45.0);
            }
            _ => panic!("expected an accessory line"),
        }
        assert_eq!(line_total(&line), 90.0);
    }

    #[test]
    fn test_snapshot_survives_catalog_edit() {
        let mut product = test_product();
        let selection = FittingSelection::product_only(&product);
        let line = build_fitting_line(selection, 2000, 1500, 2).unwrap();

        product.price_per_sqm = 999.0;

        match line {
            LineItem::Fitting(f) => assert_eq!(f.price_per_sqm, 120.0),
            _ => panic!("expected a fitting line"),
        }
    }
}
