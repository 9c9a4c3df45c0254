// stats.rs
//
// Descriptive numbers over a harvested table. Works purely on loaded
// records; charting is out of scope.

use crate::harvester::ListingRecord;
use std::collections::BTreeMap;
use std::fmt;

/// Mean/min/max over the rows where a field held a parseable number.
#[derive(Debug, PartialEq)]
pub struct FieldStats {
    pub known: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Per-room-count slice of the market.
#[derive(Debug, PartialEq)]
pub struct RoomsBreakdown {
    pub rooms: String,
    pub listings: usize,
    pub mean_price: Option<f64>,
    pub mean_size: Option<f64>,
}

#[derive(Debug, PartialEq)]
pub struct MarketSummary {
    pub listings: usize,
    pub price: FieldStats,
    pub size: FieldStats,
    pub by_rooms: Vec<RoomsBreakdown>,
}

/// Summarizes a harvested table: overall price/size statistics plus a
/// breakdown by room count. Sentinel-bearing and unparseable cells are
/// skipped per field, not per row.
pub fn summarize(records: &[ListingRecord]) -> MarketSummary {
    let prices: Vec<f64> = records.iter().filter_map(|r| numeric(&r.price)).collect();
    let sizes: Vec<f64> = records.iter().filter_map(|r| numeric(&r.size)).collect();

    let mut groups: BTreeMap<&str, Vec<&ListingRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.rooms.as_str()).or_default().push(record);
    }

    let mut by_rooms: Vec<RoomsBreakdown> = groups
        .into_iter()
        .map(|(rooms, group)| {
            let group_prices: Vec<f64> = group.iter().filter_map(|r| numeric(&r.price)).collect();
            let group_sizes: Vec<f64> = group.iter().filter_map(|r| numeric(&r.size)).collect();
            RoomsBreakdown {
                rooms: rooms.to_string(),
                listings: group.len(),
                mean_price: mean(&group_prices),
                mean_size: mean(&group_sizes),
            }
        })
        .collect();

    // BTreeMap ordered the keys lexically; "10" would sort before "2".
    by_rooms.sort_by_key(|b| b.rooms.parse::<u32>().unwrap_or(u32::MAX));

    MarketSummary {
        listings: records.len(),
        price: field_stats(&prices),
        size: field_stats(&sizes),
        by_rooms,
    }
}

fn numeric(value: &Option<String>) -> Option<f64> {
    value.as_deref().and_then(|s| s.trim().parse::<f64>().ok())
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn field_stats(values: &[f64]) -> FieldStats {
    FieldStats {
        known: values.len(),
        mean: mean(values),
        min: values.iter().copied().fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |a| a.min(v)))
        }),
        max: values.iter().copied().fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |a| a.max(v)))
        }),
    }
}

impl fmt::Display for MarketSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Listings: {}", self.listings)?;
        write_field(f, "Price (€)", &self.price)?;
        write_field(f, "Size (m²)", &self.size)?;

        for slice in &self.by_rooms {
            write!(f, "{} rooms: {} listings", slice.rooms, slice.listings)?;
            if let Some(p) = slice.mean_price {
                write!(f, ", mean price {p:.1} €")?;
            }
            if let Some(s) = slice.mean_size {
                write!(f, ", mean size {s:.1} m²")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, label: &str, stats: &FieldStats) -> fmt::Result {
    write!(f, "{label}: {} known", stats.known)?;
    if let (Some(mean), Some(min), Some(max)) = (stats.mean, stats.min, stats.max) {
        write!(f, ", mean {mean:.1}, min {min:.0}, max {max:.0}")?;
    }
    writeln!(f)
}
