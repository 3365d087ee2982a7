// Post-load consistency checks over scripting state

use super::types::{Event, Hook, HookParent, Mission};
use crate::load::Inconsistency;
use std::collections::HashSet;

/// Find events and hooks that do not fit together.
///
/// Flags duplicate event ids, events without a name and hooks whose parent
/// mission or event is not active.
pub fn check_events(
    events: &[Event],
    missions: &[Mission],
    hooks: &[Hook],
) -> Vec<Inconsistency> {
    let mut found = Vec::new();

    let mut event_ids = HashSet::new();
    for event in events {
        if !event_ids.insert(event.id) {
            found.push(Inconsistency::new(format!(
                "event id {} is active more than once",
                event.id
            )));
        }
        if event.name.is_empty() {
            found.push(Inconsistency::new(format!(
                "event {} has no name",
                event.id
            )));
        }
    }

    let mission_ids: HashSet<u32> = missions.iter().map(|m| m.id).collect();
    for hook in hooks {
        match hook.parent {
            HookParent::Event(id) if !event_ids.contains(&id) => {
                found.push(Inconsistency::new(format!(
                    "hook {} ({}) belongs to missing event {}",
                    hook.id, hook.func, id
                )));
            }
            HookParent::Mission(id) if !mission_ids.contains(&id) => {
                found.push(Inconsistency::new(format!(
                    "hook {} ({}) belongs to missing mission {}",
                    hook.id, hook.func, id
                )));
            }
            _ => {}
        }
    }

    found
}
