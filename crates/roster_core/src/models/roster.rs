use super::player::{Player, Position};
use std::collections::BTreeMap;

/// The batting order plus per-player attribute maps.
///
/// `order` is significant: it is the batting order. Both maps are keyed by
/// player name (the identity key) and are kept total over `order`: every
/// listed name has exactly one position and one alternate entry, and no
/// entry exists for a name that is not listed. Ordered maps keep the
/// serialized document deterministic, so identical rosters persist to
/// identical bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    pub(crate) order: Vec<String>,
    pub(crate) positions: BTreeMap<String, Position>,
    pub(crate) alternates: BTreeMap<String, String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Case-sensitive exact-match membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.order.iter().any(|n| n == name)
    }

    pub fn position_of(&self, name: &str) -> Option<Position> {
        self.positions.get(name).copied()
    }

    pub fn alternate_of(&self, name: &str) -> Option<&str> {
        self.alternates.get(name).map(String::as_str)
    }

    /// Ordered (name, position, alternate) triples for rendering.
    pub fn players(&self) -> Vec<Player> {
        self.order
            .iter()
            .map(|name| Player {
                name: name.clone(),
                position: self.position_of(name).unwrap_or_default(),
                alternate: self.alternates.get(name).cloned().unwrap_or_default(),
            })
            .collect()
    }

    /// Appends a player at the end of the batting order with an empty
    /// alternate. The caller has already rejected duplicate names.
    pub(crate) fn append(&mut self, name: String, position: Position) {
        self.positions.insert(name.clone(), position);
        self.alternates.insert(name.clone(), String::new());
        self.order.push(name);
    }

    /// Removes the name from the order and both attribute maps. Other
    /// players are untouched.
    pub(crate) fn remove(&mut self, name: &str) {
        self.order.retain(|n| n != name);
        self.positions.remove(name);
        self.alternates.remove(name);
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.order.swap(a, b);
    }

    pub(crate) fn set_position(&mut self, name: &str, position: Position) {
        self.positions.insert(name.to_string(), position);
    }

    pub(crate) fn set_alternate(&mut self, name: &str, alternate: String) {
        self.alternates.insert(name.to_string(), alternate);
    }

    /// Repairs the attribute maps after a load: a listed name with no
    /// position entry gets the default position, one with no alternate entry
    /// gets the empty string, and entries for names no longer listed are
    /// dropped. Returns true if anything was repaired.
    pub fn normalize(&mut self) -> bool {
        let mut changed = false;

        for name in &self.order {
            if !self.positions.contains_key(name) {
                self.positions.insert(name.clone(), Position::default());
                changed = true;
            }
            if !self.alternates.contains_key(name) {
                self.alternates.insert(name.clone(), String::new());
                changed = true;
            }
        }

        let orphans: Vec<String> = self
            .positions
            .keys()
            .chain(self.alternates.keys())
            .filter(|name| !self.contains(name))
            .cloned()
            .collect();
        for name in orphans {
            self.positions.remove(&name);
            self.alternates.remove(&name);
            changed = true;
        }

        changed
    }
}
