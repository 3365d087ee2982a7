// Section readers for the save document.
// Each one finds its own section under the root; a missing section is empty state.

use super::types::{Commodity, Event, Hook, HookParent, Mission, Player, Ship, StarSystem, Var};
use crate::load::SubsystemResult;
use crate::nsave::pure::xml::{attr, child, child_text, child_u64, children, text};
use roxmltree::Node;
use std::collections::BTreeMap;

fn required_attr(node: Node, name: &str) -> SubsystemResult<String> {
    attr(node, name).ok_or_else(|| {
        format!("<{}> is missing attribute '{}'", node.tag_name().name(), name).into()
    })
}

fn u32_attr(node: Node, name: &str) -> SubsystemResult<u32> {
    let raw = required_attr(node, name)?;
    raw.parse().map_err(|_| {
        format!("<{}> has invalid {} '{}'", node.tag_name().name(), name, raw).into()
    })
}

pub fn parse_diffs(root: Node) -> Vec<String> {
    child(root, "diffs")
        .map(|diffs| children(diffs, "diff").filter_map(text).collect())
        .unwrap_or_default()
}

pub fn parse_factions(root: Node) -> SubsystemResult<BTreeMap<String, f64>> {
    let mut out = BTreeMap::new();
    let Some(factions) = child(root, "factions") else {
        return Ok(out);
    };
    for faction in children(factions, "faction") {
        let name = required_attr(faction, "name")?;
        let standing = match text(faction) {
            Some(raw) => raw
                .parse::<f64>()
                .map_err(|_| format!("faction '{}' has invalid standing '{}'", name, raw))?,
            None => 0.0,
        };
        out.insert(name, standing);
    }
    Ok(out)
}

pub fn parse_player(root: Node) -> SubsystemResult<Player> {
    let player = child(root, "player").ok_or("save has no <player> section")?;
    let location = child_text(player, "location").unwrap_or_default();

    let ship = match child(player, "ship") {
        Some(ship) => Some(parse_ship(ship)?),
        None => None,
    };

    Ok(Player {
        name: attr(player, "name").unwrap_or_default(),
        credits: child_u64(player, "credits"),
        time: child_u64(player, "time"),
        location,
        ship,
    })
}

fn parse_ship(ship: Node) -> SubsystemResult<Ship> {
    let mut commodities = Vec::new();
    if let Some(list) = child(ship, "commodities") {
        for commodity in children(list, "commodity") {
            let Some(name) = text(commodity) else {
                continue;
            };
            commodities.push(Commodity {
                quantity: u32_attr(commodity, "quantity")?,
                name,
            });
        }
    }

    Ok(Ship {
        name: attr(ship, "name").unwrap_or_default(),
        model: required_attr(ship, "model")?,
        gui: attr(ship, "gui"),
        cargo_capacity: attr(ship, "cargo")
            .and_then(|c| c.parse().ok())
            .unwrap_or(0),
        commodities,
    })
}

pub fn parse_vars(root: Node) -> SubsystemResult<BTreeMap<String, Var>> {
    let mut out = BTreeMap::new();
    let Some(vars) = child(root, "vars") else {
        return Ok(out);
    };
    for var in children(vars, "var") {
        let name = required_attr(var, "name")?;
        let raw = text(var).unwrap_or_default();
        let value = match var.attribute("type").unwrap_or("str") {
            "num" => Var::Num(
                raw.parse::<f64>()
                    .map_err(|_| format!("var '{}' is not a number: '{}'", name, raw))?,
            ),
            "bool" => Var::Bool(raw == "1" || raw.eq_ignore_ascii_case("true")),
            "str" => Var::Str(raw),
            other => return Err(format!("var '{}' has unknown type '{}'", name, other).into()),
        };
        out.insert(name, value);
    }
    Ok(out)
}

pub fn parse_missions(root: Node) -> SubsystemResult<Vec<Mission>> {
    let mut out = Vec::new();
    if let Some(missions) = child(root, "missions") {
        for mission in children(missions, "mission") {
            out.push(Mission {
                id: u32_attr(mission, "id")?,
                name: required_attr(mission, "data")?,
            });
        }
    }
    Ok(out)
}

pub fn parse_events(root: Node) -> SubsystemResult<Vec<Event>> {
    let mut out = Vec::new();
    if let Some(events) = child(root, "events") {
        for event in children(events, "event") {
            // Empty names are kept so the sanity check can flag them
            out.push(Event {
                id: u32_attr(event, "id")?,
                name: attr(event, "name").unwrap_or_default(),
            });
        }
    }
    Ok(out)
}

pub fn parse_hooks(root: Node) -> SubsystemResult<Vec<Hook>> {
    let mut out = Vec::new();
    if let Some(hooks) = child(root, "hooks") {
        for hook in children(hooks, "hook") {
            let parent_id = u32_attr(hook, "parent_id")?;
            let parent = match hook.attribute("parent") {
                Some("mission") => HookParent::Mission(parent_id),
                Some("event") => HookParent::Event(parent_id),
                other => {
                    return Err(format!("hook has unknown parent kind {:?}", other).into());
                }
            };
            out.push(Hook {
                id: u32_attr(hook, "id")?,
                kind: required_attr(hook, "type")?,
                parent,
                func: required_attr(hook, "func")?,
            });
        }
    }
    Ok(out)
}

pub fn parse_space(root: Node) -> SubsystemResult<Option<StarSystem>> {
    let Some(system) = child(root, "space").and_then(|space| child(space, "system")) else {
        return Ok(None);
    };
    let name = required_attr(system, "name")?;
    let price_modifier = match attr(system, "price_modifier") {
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|_| format!("system '{}' has invalid price modifier '{}'", name, raw))?,
        None => 1.0,
    };
    Ok(Some(StarSystem {
        planets: children(system, "planet").filter_map(text).collect(),
        name,
        price_modifier,
    }))
}
