use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{NO_WIN_GIFT_IMAGE, NO_WIN_GIFT_NAME};

/// Reserved id for the "no win" placeholder. Real gifts always have
/// positive ids assigned by the backend.
pub const NO_WIN_GIFT_ID: i64 = -1;

/// A single prize on the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub lucky_draw_system: i64,
}

impl Gift {
    /// The placeholder entry shown when a spin wins nothing.
    pub fn no_win(lucky_draw_system: i64) -> Self {
        Self {
            id: NO_WIN_GIFT_ID,
            name: NO_WIN_GIFT_NAME.to_string(),
            image: NO_WIN_GIFT_IMAGE.to_string(),
            lucky_draw_system,
        }
    }

    pub fn is_no_win(&self) -> bool {
        self.id == NO_WIN_GIFT_ID
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// The wheel needs at least the no-win entry to be drawable.
    Empty,
    /// The no-win entry must sit at index 0 so a losing spin has a
    /// well-defined resting sector.
    MissingSentinel,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "gift catalog is empty"),
            CatalogError::MissingSentinel => {
                write!(f, "gift catalog must start with the no-win entry")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// The ordered list of wheel entries for one reveal session. The order
/// fixes both the visual sector layout and the index used for the
/// rotation math, so the catalog is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GiftCatalog {
    gifts: Vec<Gift>,
}

impl GiftCatalog {
    pub fn new(gifts: Vec<Gift>) -> Result<Self, CatalogError> {
        match gifts.first() {
            None => Err(CatalogError::Empty),
            Some(first) if first.id != NO_WIN_GIFT_ID => Err(CatalogError::MissingSentinel),
            Some(_) => Ok(Self { gifts }),
        }
    }

    /// Builds a catalog from the backend's gift list, placing the no-win
    /// entry first. Any no-win entry already present in the list is
    /// dropped rather than duplicated.
    pub fn with_sentinel(lucky_draw_system: i64, gifts: Vec<Gift>) -> Self {
        let mut all = Vec::with_capacity(gifts.len() + 1);
        all.push(Gift::no_win(lucky_draw_system));
        all.extend(gifts.into_iter().filter(|gift| !gift.is_no_win()));
        Self { gifts: all }
    }

    pub fn len(&self) -> usize {
        self.gifts.len()
    }

    pub fn is_empty(&self) -> bool {
        // Construction guarantees at least the no-win entry.
        false
    }

    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    pub fn get(&self, index: usize) -> Option<&Gift> {
        self.gifts.get(index)
    }

    pub fn no_win_entry(&self) -> &Gift {
        &self.gifts[0]
    }

    /// Angular width of one sector in degrees.
    pub fn sector_angle(&self) -> f64 {
        360.0 / self.gifts.len() as f64
    }

    pub fn position_of(&self, id: i64) -> Option<usize> {
        self.gifts.iter().position(|gift| gift.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gift(id: i64, name: &str) -> Gift {
        Gift {
            id,
            name: name.to_string(),
            image: format!("/gifts/{id}.png"),
            lucky_draw_system: 1,
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(GiftCatalog::new(vec![]), Err(CatalogError::Empty));
    }

    #[test]
    fn test_catalog_without_sentinel_rejected() {
        let result = GiftCatalog::new(vec![gift(5, "Phone")]);
        assert_eq!(result, Err(CatalogError::MissingSentinel));
    }

    #[test]
    fn test_with_sentinel_prepends_no_win() {
        let catalog = GiftCatalog::with_sentinel(3, vec![gift(5, "Phone"), gift(9, "Cap")]);
        assert_eq!(catalog.len(), 3);
        assert!(catalog.no_win_entry().is_no_win());
        assert_eq!(catalog.position_of(5), Some(1));
        assert_eq!(catalog.position_of(9), Some(2));
    }

    #[test]
    fn test_with_sentinel_drops_duplicate_no_win() {
        let catalog = GiftCatalog::with_sentinel(3, vec![Gift::no_win(3), gift(5, "Phone")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.position_of(NO_WIN_GIFT_ID), Some(0));
    }

    #[test]
    fn test_sector_angle() {
        let catalog = GiftCatalog::with_sentinel(1, vec![gift(5, "Phone"), gift(9, "Cap")]);
        assert!((catalog.sector_angle() - 120.0).abs() < f64::EPSILON);

        let sentinel_only = GiftCatalog::with_sentinel(1, vec![]);
        assert!((sentinel_only.sector_angle() - 360.0).abs() < f64::EPSILON);
    }
}
