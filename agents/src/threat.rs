//! Threat set construction: every place a hunter stands on or could
//! reach next turn, plus the hospital's surroundings while a hunter is
//! out of action.

use crate::error::{DecisionError, Result};
use crate::tables::QUARANTINE_ZONE;
use fod_engine::map;
use fod_engine::types::*;
use fod_engine::visibility::GameView;
use std::collections::BTreeSet;

/// What Dracula knows about one hunter this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunterIntel {
    pub player: Player,
    pub location: PlaceId,
    pub health: i32,
    pub reachable: Vec<PlaceId>,
}

impl HunterIntel {
    pub fn is_incapacitated(&self) -> bool {
        self.health <= HUNTER_MIN_HEALTH
    }
}

pub fn check_place(place: PlaceId) -> Result<PlaceId> {
    if map::is_valid(place) {
        Ok(place)
    } else {
        Err(DecisionError::UnknownPlace(place.0))
    }
}

/// Read all four hunters from the view in turn order.
pub fn survey_hunters(view: &dyn GameView) -> Result<Vec<HunterIntel>> {
    Player::HUNTERS
        .iter()
        .map(|&player| -> Result<HunterIntel> {
            let location = view.location_of(player).ok_or(DecisionError::UnplacedPlayer(player))?;
            check_place(location)?;
            let reachable = view.reachable_destinations(player);
            for &place in &reachable {
                check_place(place)?;
            }
            Ok(HunterIntel { player, location, health: view.health_of(player), reachable })
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreatSet {
    places: BTreeSet<PlaceId>,
}

impl ThreatSet {
    pub fn build(hunters: &[HunterIntel]) -> ThreatSet {
        let mut places: BTreeSet<PlaceId> = hunters.iter().map(|h| h.location).collect();
        for hunter in hunters {
            places.extend(hunter.reachable.iter().copied());
        }
        if hunters.iter().any(HunterIntel::is_incapacitated) {
            places.extend(QUARANTINE_ZONE.iter().copied());
        }
        ThreatSet { places }
    }

    pub fn contains(&self, place: PlaceId) -> bool {
        self.places.contains(&place)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Places in id order.
    pub fn iter(&self) -> impl Iterator<Item = PlaceId> + '_ {
        self.places.iter().copied()
    }
}

impl FromIterator<PlaceId> for ThreatSet {
    fn from_iter<I: IntoIterator<Item = PlaceId>>(iter: I) -> Self {
        ThreatSet { places: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{hunter_intel, view_with_hunters};
    use fod_engine::map::*;
    use fod_engine::visibility::PlayerIntel;
    use proptest::prelude::*;

    #[test]
    fn test_locations_and_reach_are_threatened() {
        let hunters = vec![
            hunter_intel(Player::LordGodalming, MUNICH, 9, &[MUNICH, NUREMBURG, ZURICH]),
            hunter_intel(Player::DrSeward, LONDON, 6, &[]),
        ];
        let threats = ThreatSet::build(&hunters);
        assert_eq!(threats.len(), 4);
        assert!(threats.contains(LONDON));
        assert!(threats.contains(ZURICH));
        assert!(!threats.contains(SZEGED));
    }

    #[test]
    fn test_quarantine_only_while_a_hunter_is_down() {
        let mut hunters = vec![hunter_intel(Player::VanHelsing, LISBON, 1, &[LISBON, MADRID])];
        assert!(!ThreatSet::build(&hunters).contains(SZEGED));

        hunters[0].health = 0;
        let threats = ThreatSet::build(&hunters);
        for place in QUARANTINE_ZONE {
            assert!(threats.contains(place));
        }
        assert_eq!(threats.len(), 2 + QUARANTINE_ZONE.len());
    }

    #[test]
    fn test_survey_rejects_unplaced_hunter() {
        let mut view = view_with_hunters([
            PlayerIntel { location: Some(PARIS), health: 9, reachable: vec![] },
            PlayerIntel { location: None, health: 9, reachable: vec![] },
            PlayerIntel { location: Some(ROME), health: 9, reachable: vec![] },
            PlayerIntel { location: Some(MADRID), health: 9, reachable: vec![] },
        ]);
        assert_eq!(survey_hunters(&view), Err(DecisionError::UnplacedPlayer(Player::DrSeward)));

        view.players[1].location = Some(PlaceId(99));
        assert_eq!(survey_hunters(&view), Err(DecisionError::UnknownPlace(99)));
    }

    #[test]
    fn test_survey_keeps_turn_order() {
        let view = view_with_hunters([
            PlayerIntel { location: Some(PARIS), health: 9, reachable: vec![PARIS] },
            PlayerIntel { location: Some(ROME), health: 4, reachable: vec![] },
            PlayerIntel { location: Some(MADRID), health: 0, reachable: vec![] },
            PlayerIntel { location: Some(VIENNA), health: 7, reachable: vec![VIENNA, PRAGUE] },
        ]);
        let hunters = survey_hunters(&view).unwrap();
        let players: Vec<Player> = hunters.iter().map(|h| h.player).collect();
        assert_eq!(players, Player::HUNTERS.to_vec());
        assert_eq!(hunters[3].reachable, vec![VIENNA, PRAGUE]);
        assert!(hunters[2].is_incapacitated());
    }

    fn arb_hunters() -> impl Strategy<Value = Vec<HunterIntel>> {
        let place = (0..NUM_PLACES as u8).prop_map(PlaceId);
        prop::collection::vec(
            (place.clone(), 0..=HUNTER_MAX_HEALTH, prop::collection::vec(place, 0..12)),
            4,
        )
        .prop_map(|raw| {
            raw.into_iter()
                .zip(Player::HUNTERS)
                .map(|((location, health, reachable), player)| HunterIntel { player, location, health, reachable })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_threats_cover_every_hunter(hunters in arb_hunters()) {
            let threats = ThreatSet::build(&hunters);
            let mut seen = BTreeSet::new();
            for h in &hunters {
                prop_assert!(threats.contains(h.location));
                seen.insert(h.location);
                for &p in &h.reachable {
                    prop_assert!(threats.contains(p));
                    seen.insert(p);
                }
            }
            if hunters.iter().any(|h| h.health == HUNTER_MIN_HEALTH) {
                for &q in QUARANTINE_ZONE.iter() {
                    prop_assert!(threats.contains(q));
                }
            } else {
                prop_assert_eq!(threats.len(), seen.len());
            }
        }
    }
}
