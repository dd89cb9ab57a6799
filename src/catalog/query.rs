use std::collections::HashSet;

use crate::model::{Character, RegionFilter};

/// Regiones distintas en orden de primera aparición.
pub fn distinct_regions(data: &[Character]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();

    for c in data {
        if seen.insert(c.region.as_str()) {
            out.push(c.region.clone());
        }
    }

    out
}

/// Opciones del selector: ALL primero, luego cada región.
pub fn region_options(regions: &[String]) -> Vec<RegionFilter> {
    std::iter::once(RegionFilter::All)
        .chain(regions.iter().cloned().map(RegionFilter::Region))
        .collect()
}

pub fn filter_by_region(data: Vec<Character>, region: &RegionFilter) -> Vec<Character> {
    match region {
        RegionFilter::All => data,
        RegionFilter::Region(_) => data.into_iter().filter(|c| region.matches(c)).collect(),
    }
}
