use crate::{BloodType, InventoryItem};

/// Counts strictly below this are critical.
pub const CRITICAL_BELOW_UNITS: u32 = 10;

/// Counts strictly below this (and not critical) are low.
pub const LOW_BELOW_UNITS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Critical,
    Low,
    Good,
}

impl StockStatus {
    pub fn classify(units: u32) -> Self {
        if units < CRITICAL_BELOW_UNITS {
            StockStatus::Critical
        } else if units < LOW_BELOW_UNITS {
            StockStatus::Low
        } else {
            StockStatus::Good
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Critical => "Critical",
            StockStatus::Low => "Low",
            StockStatus::Good => "Good",
        }
    }

    /// Critical and low stock both count as "needing donors".
    pub fn needs_donors(self) -> bool {
        !matches!(self, StockStatus::Good)
    }
}

/// Blood types whose stock is below [`LOW_BELOW_UNITS`], in inventory order.
pub fn low_stock_items(inventory: &[InventoryItem]) -> Vec<BloodType> {
    inventory
        .iter()
        .filter(|item| item.status().needs_donors())
        .map(|item| item.blood_type)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(StockStatus::classify(0), StockStatus::Critical);
        assert_eq!(StockStatus::classify(9), StockStatus::Critical);
        assert_eq!(StockStatus::classify(10), StockStatus::Low);
        assert_eq!(StockStatus::classify(19), StockStatus::Low);
        assert_eq!(StockStatus::classify(20), StockStatus::Good);
        assert_eq!(StockStatus::classify(u32::MAX), StockStatus::Good);
    }

    #[test]
    fn low_stock_keeps_inventory_order() {
        let inventory = vec![
            InventoryItem {
                blood_type: BloodType::OPositive,
                units: 45,
            },
            InventoryItem {
                blood_type: BloodType::ONegative,
                units: 4,
            },
            InventoryItem {
                blood_type: BloodType::BPositive,
                units: 19,
            },
        ];
        assert_eq!(
            low_stock_items(&inventory),
            vec![BloodType::ONegative, BloodType::BPositive]
        );
    }
}
