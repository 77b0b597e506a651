//! Blooming calendar data: seasons, months and the plants blooming in each.
//!
//! A [`BloomCalendar`] is validated once at construction, so every month the
//! chart can show is guaranteed to have a plant list. The flattened month
//! sequence (seasons in table order, months in listed order) is what the
//! inner ring draws and what hover indices refer to.

use crate::color::Rgba;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashSet};

/// A season: a named, colored group of months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    name: String,
    months: Vec<String>,
    color: Rgba,
}

impl Season {
    /// Create a season from its name, display color and ordered months.
    pub fn new<N, M>(name: N, color: Rgba, months: impl IntoIterator<Item = M>) -> Self
    where
        N: Into<String>,
        M: Into<String>,
    {
        Self {
            name: name.into(),
            months: months.into_iter().map(Into::into).collect(),
            color,
        }
    }

    /// Season name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Months of this season, in ring order.
    #[must_use]
    pub fn months(&self) -> &[String] {
        &self.months
    }

    /// Display color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// Angular weight of this season on the outer ring.
    #[must_use]
    pub fn weight(&self) -> u32 {
        self.months.len() as u32
    }

    /// Whether `month` belongs to this season.
    #[must_use]
    pub fn contains(&self, month: &str) -> bool {
        self.months.iter().any(|m| m == month)
    }
}

/// A month in the flattened ring sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Month {
    name: String,
    season_index: usize,
}

impl Month {
    /// Month name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of the owning season in [`BloomCalendar::seasons`].
    #[must_use]
    pub const fn season_index(&self) -> usize {
        self.season_index
    }

    /// Angular weight on the inner ring. Every month counts the same.
    #[must_use]
    pub const fn weight(&self) -> u32 {
        1
    }
}

/// Validated season and plant tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomCalendar {
    seasons: Vec<Season>,
    months: Vec<Month>,
    plants: BTreeMap<String, Vec<String>>,
}

impl Default for BloomCalendar {
    fn default() -> Self {
        Self::garden()
    }
}

impl BloomCalendar {
    /// Build a calendar, checking the tables are consistent.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyData`] if there are no seasons.
    /// - [`Error::EmptySeason`] if a season lists no months.
    /// - [`Error::DuplicateMonth`] if a month is listed twice.
    /// - [`Error::MissingPlants`] if a month has no (or an empty) plant list.
    pub fn new(seasons: Vec<Season>, plants: BTreeMap<String, Vec<String>>) -> Result<Self> {
        if seasons.is_empty() {
            return Err(Error::EmptyData);
        }

        let mut seen = HashSet::new();
        let mut months = Vec::new();

        for (season_index, season) in seasons.iter().enumerate() {
            if season.months.is_empty() {
                return Err(Error::EmptySeason(season.name.clone()));
            }
            for name in &season.months {
                if !seen.insert(name.as_str()) {
                    return Err(Error::DuplicateMonth(name.clone()));
                }
                match plants.get(name) {
                    Some(list) if !list.is_empty() => {}
                    _ => return Err(Error::MissingPlants(name.clone())),
                }
                months.push(Month {
                    name: name.clone(),
                    season_index,
                });
            }
        }

        for key in plants.keys().filter(|k| !seen.contains(k.as_str())) {
            tracing::debug!(month = %key, "plant list for a month not in any season is ignored");
        }

        Ok(Self {
            seasons,
            months,
            plants,
        })
    }

    /// The reference garden: four seasons of three months each.
    #[must_use]
    pub fn garden() -> Self {
        let seasons = vec![
            Season::new(
                "Winter",
                Rgba::rgb(0xe3, 0xe3, 0xff),
                ["February", "January", "December"],
            ),
            Season::new(
                "Fall",
                Rgba::rgb(0xe4, 0x9b, 0x0f),
                ["November", "October", "September"],
            ),
            Season::new(
                "Summer",
                Rgba::rgb(0xff, 0x4e, 0x50),
                ["August", "July", "June"],
            ),
            Season::new(
                "Spring",
                Rgba::rgb(0xc6, 0xd7, 0xb9),
                ["May", "April", "March"],
            ),
        ];

        let table: [(&str, &[&str]); 12] = [
            ("March", &["Daffodil", "Tulip", "Hyacinth"]),
            ("April", &["Tulip", "Daffodil", "Cherry Blossom", "Azalea"]),
            ("May", &["Peony", "Lilac", "Rose", "Iris"]),
            ("June", &["Rose", "Peony", "Lavender"]),
            ("July", &["Lily", "Sunflower", "Hydrangea", "Daylily"]),
            (
                "August",
                &["Sunflower", "Dahlia", "Black-eyed Susan", "Coneflower"],
            ),
            (
                "September",
                &["Dahlia", "Aster", "Mum", "Goldenrod", "Sedum"],
            ),
            ("October", &["Mum", "Aster", "Stonecrop", "Goldenrod"]),
            ("November", &["Mum", "Camellia", "Winter Jasmine"]),
            ("December", &["Camellia", "Winter Jasmine", "Hellebore"]),
            ("January", &["Hellebore", "Winter Aconite", "Snowdrop"]),
            ("February", &["Snowdrop", "Winter Aconite"]),
        ];
        let plants = table
            .iter()
            .map(|(month, list)| {
                (
                    (*month).to_string(),
                    list.iter().map(|p| (*p).to_string()).collect(),
                )
            })
            .collect();

        Self::new(seasons, plants).expect("built-in garden tables are consistent")
    }

    /// Seasons in ring order.
    #[must_use]
    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    /// The flattened month sequence.
    #[must_use]
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Number of months on the inner ring.
    #[must_use]
    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    /// Sum of season weights, equal to the sum of month weights.
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.seasons.iter().map(Season::weight).sum()
    }

    /// Month at a flattened index.
    #[must_use]
    pub fn month(&self, index: usize) -> Option<&Month> {
        self.months.get(index)
    }

    /// Flattened index of a month by name.
    #[must_use]
    pub fn index_of(&self, month: &str) -> Option<usize> {
        self.months.iter().position(|m| m.name == month)
    }

    /// Season a month belongs to.
    #[must_use]
    pub fn season_of(&self, month: &str) -> Option<&Season> {
        self.months
            .iter()
            .find(|m| m.name == month)
            .and_then(|m| self.seasons.get(m.season_index))
    }

    /// Season by name.
    pub fn season(&self, name: &str) -> Result<&Season> {
        self.seasons
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::UnknownSeason(name.to_string()))
    }

    /// Plants for a month, or `None` if the month has no entry.
    #[must_use]
    pub fn try_plants(&self, month: &str) -> Option<&[String]> {
        self.plants.get(month).map(Vec::as_slice)
    }

    /// Plants blooming in `month`, in table order.
    ///
    /// Validation guarantees every calendar month has an entry. Asking for
    /// anything else is a data-integrity bug: debug builds panic, release
    /// builds log it and return an empty list.
    #[must_use]
    pub fn plants(&self, month: &str) -> &[String] {
        if let Some(list) = self.try_plants(month) {
            return list;
        }
        debug_assert!(false, "no plant list for month {month:?}");
        tracing::error!(month, "no plant list for month; rendering empty list");
        &[]
    }

    /// The full month→plants table.
    #[must_use]
    pub fn plant_table(&self) -> &BTreeMap<String, Vec<String>> {
        &self.plants
    }
}
