use std::collections::HashSet;

use super::dto::Nutrient;

const PRIORITY: [&str; 6] = [
    "Energy",
    "Protein",
    "Total lipid (fat)",
    "Carbohydrate, by difference",
    "Fiber, total dietary",
    "Sodium, Na",
];

pub const MAX_DISPLAY_NUTRIENTS: usize = 10;

/// Picks what the nutrient list shows: the headline nutrients first in a fixed
/// order, then the rest in backend order, without repeats or kJ energy rows,
/// capped at [`MAX_DISPLAY_NUTRIENTS`].
pub fn select_display_nutrients(nutrients: &[Nutrient]) -> Vec<Nutrient> {
    let mut out: Vec<Nutrient> = Vec::with_capacity(MAX_DISPLAY_NUTRIENTS);
    let mut seen: HashSet<&str> = HashSet::new();

    for name in PRIORITY {
        if let Some(hit) = nutrients.iter().find(|n| n.name == name) {
            out.push(hit.clone());
            seen.insert(name);
        }
    }

    for n in nutrients {
        if seen.contains(n.name.as_str()) {
            continue;
        }
        if n.name == "Energy" && is_kilojoules(n) {
            continue;
        }
        if out.len() >= MAX_DISPLAY_NUTRIENTS {
            break;
        }
        out.push(n.clone());
        seen.insert(n.name.as_str());
    }

    out
}

fn is_kilojoules(n: &Nutrient) -> bool {
    n.unit
        .as_deref()
        .map(|u| u.eq_ignore_ascii_case("kj"))
        .unwrap_or(false)
}
