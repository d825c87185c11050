// ═══════════════════════════════════════════════════════════════════════
// Test suite for the board, movement rules and Dracula's view
// ═══════════════════════════════════════════════════════════════════════

use crate::engine::{apply_dracula_move, apply_hunter_move, RuleError};
use crate::map::*;
use crate::navigation;
use crate::setup::{create_initial_state, random_position};
use crate::types::*;
use crate::visibility::{dracula_view, DraculaView, GameView};
use std::collections::HashSet;

// ── Helper: Dracula mid-chase with a given trail (oldest first) ─────────

fn state_with_trail(trail: &[PlaceId]) -> GameState {
    let mut state = create_initial_state();
    state.round = trail.len() as Round;
    state.trail = trail.iter()
        .map(|&p| TrailEntry { play: Move::Location(p), location: p, trap: false })
        .collect();
    state.player_mut(Player::Dracula).location = trail.last().copied();
    state
}

// ═════════════════════════════════════════════════════════════════════════
// MAP TESTS
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn test_place_ids_match_table_index() {
    for (i, p) in PLACES.iter().enumerate() {
        assert_eq!(p.id.0 as usize, i, "{} is out of place", p.name);
    }
}

#[test]
fn test_place_codes_unique() {
    let codes: HashSet<&str> = PLACES.iter().map(|p| p.code).collect();
    assert_eq!(codes.len(), NUM_PLACES);
}

#[test]
fn test_ports_are_land_with_boat_connection() {
    for p in PLACES.iter() {
        let has_boat = neighbours(p.id, Transport::Boat).next().is_some();
        assert_eq!(p.is_port(), p.is_land() && has_boat, "{}", p.name);
    }
    assert_eq!(ports().count(), 29);
}

#[test]
fn test_seas_only_connect_by_boat() {
    for &(a, b) in ROADS.iter().chain(RAILS.iter()) {
        assert!(is_land(a) && is_land(b), "{} - {}", place_name(a), place_name(b));
    }
    for p in PLACES.iter().filter(|p| p.is_sea()) {
        assert!(neighbours(p.id, Transport::Boat).next().is_some(), "{} is isolated", p.name);
    }
}

#[test]
fn test_place_lookup_by_code() {
    assert_eq!(place_by_code("CD"), Some(CASTLE_DRACULA));
    assert_eq!(place_by_code("JM"), Some(HOSPITAL));
    assert_eq!(place_by_code("XX"), None);
    assert_eq!(place_name(GALATZ), "Galatz");
}

#[test]
fn test_move_codes() {
    assert_eq!(Move::Location(GALATZ).code(), "GA");
    assert_eq!(Move::Hide.code(), "HI");
    assert_eq!(Move::DoubleBack(3).code(), "D3");
    assert_eq!(Move::Teleport.to_string(), "TP");

    assert_eq!(Move::from_code("D3"), Some(Move::DoubleBack(3)));
    assert_eq!(Move::from_code("DU"), Some(Move::Location(DUBLIN)));
    assert_eq!(Move::from_code("D6"), None);
    assert_eq!(Move::from_code("HI"), Some(Move::Hide));
    assert_eq!(Move::from_code("TP"), Some(Move::Teleport));
}

#[test]
fn test_stays_put() {
    assert!(Move::Hide.stays_put());
    assert!(Move::DoubleBack(1).stays_put());
    assert!(!Move::DoubleBack(2).stays_put());
    assert!(!Move::Location(VARNA).stays_put());
}

// ═════════════════════════════════════════════════════════════════════════
// NAVIGATION TESTS
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn test_rail_distance_cycles_with_round_and_hunter() {
    assert_eq!(navigation::rail_distance(0, Player::LordGodalming), 0);
    assert_eq!(navigation::rail_distance(1, Player::DrSeward), 2);
    assert_eq!(navigation::rail_distance(2, Player::MinaHarker), 1);
    assert_eq!(navigation::rail_distance(4, Player::LordGodalming), 0);
}

#[test]
fn test_hunter_reachable_includes_current_place() {
    let reach = navigation::hunter_reachable(CASTLE_DRACULA, Player::LordGodalming, 0);
    assert_eq!(reach, vec![CASTLE_DRACULA, GALATZ, KLAUSENBURG]);
}

#[test]
fn test_hunter_rail_hops_follow_distance() {
    let g = Player::LordGodalming;
    let none = navigation::hunter_reachable(BUCHAREST, g, 0);
    assert!(!none.contains(&SZEGED));

    let one = navigation::hunter_reachable(BUCHAREST, g, 1);
    assert!(one.contains(&SZEGED));
    assert!(!one.contains(&BUDAPEST));

    let two = navigation::hunter_reachable(BUCHAREST, g, 2);
    assert!(two.contains(&BUDAPEST));
}

#[test]
fn test_hunter_reachable_by_boat() {
    let reach = navigation::hunter_reachable(VARNA, Player::LordGodalming, 0);
    assert!(reach.contains(&BLACK_SEA));
}

#[test]
fn test_dracula_never_enters_hospital() {
    let state = state_with_trail(&[SZEGED]);
    let dests = navigation::dracula_destinations(&state);
    assert_eq!(dests, vec![BELGRADE, BUDAPEST, KLAUSENBURG, ZAGREB]);
    assert!(!dests.contains(&HOSPITAL));
}

#[test]
fn test_dracula_trail_places_excluded() {
    let state = state_with_trail(&[KLAUSENBURG, SZEGED]);
    let dests = navigation::dracula_destinations(&state);
    assert!(!dests.contains(&KLAUSENBURG));
    assert!(dests.contains(&BUDAPEST));
}

#[test]
fn test_oldest_trail_place_is_free_again() {
    // Only the five newest moves restrict the next one
    let state = state_with_trail(&[BELGRADE, SOFIA, BUCHAREST, GALATZ, CASTLE_DRACULA, KLAUSENBURG]);
    let dests = navigation::dracula_destinations(&state);
    assert!(dests.contains(&BELGRADE));
    assert!(!dests.contains(&BUCHAREST));
    assert!(!dests.contains(&GALATZ));
}

#[test]
fn test_hide_unavailable_at_sea() {
    let state = state_with_trail(&[VARNA, BLACK_SEA]);
    let moves = navigation::dracula_moves(&state);
    assert!(!moves.contains(&Move::Hide));
    assert!(moves.contains(&Move::DoubleBack(1)));
}

#[test]
fn test_double_back_depth_follows_trail() {
    let state = state_with_trail(&[KLAUSENBURG, CASTLE_DRACULA, GALATZ]);
    let moves = navigation::dracula_moves(&state);
    assert!(moves.contains(&Move::DoubleBack(3)));
    assert!(!moves.contains(&Move::DoubleBack(4)));
    assert_eq!(navigation::resolve_move(&state, Move::DoubleBack(2)), Some(CASTLE_DRACULA));
    assert_eq!(navigation::resolve_move(&state, Move::Hide), Some(GALATZ));
}

#[test]
fn test_no_second_hide_in_memory() {
    let mut state = state_with_trail(&[KLAUSENBURG, KLAUSENBURG]);
    state.trail[1].play = Move::Hide;
    let moves = navigation::dracula_moves(&state);
    assert!(!moves.contains(&Move::Hide));
}

#[test]
fn test_round_zero_start_places() {
    let state = create_initial_state();
    let moves = navigation::dracula_moves(&state);
    assert_eq!(moves.len(), 60);
    assert!(!moves.contains(&Move::Location(HOSPITAL)));
    assert!(!moves.contains(&Move::Location(BLACK_SEA)));
}

// ═════════════════════════════════════════════════════════════════════════
// RULES TESTS
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn test_sea_costs_blood() {
    let mut state = state_with_trail(&[CONSTANTA]);
    apply_dracula_move(&mut state, Move::Location(BLACK_SEA)).unwrap();
    assert_eq!(state.health(Player::Dracula), DRACULA_START_BLOOD - LIFE_LOSS_SEA);
    assert_eq!(state.round, 2);
    assert!(state.traps.is_empty());
}

#[test]
fn test_castle_dracula_restores_blood_and_lays_trap() {
    let mut state = state_with_trail(&[GALATZ]);
    apply_dracula_move(&mut state, Move::Location(CASTLE_DRACULA)).unwrap();
    assert_eq!(state.health(Player::Dracula), DRACULA_START_BLOOD + LIFE_GAIN_CASTLE_DRACULA);
    assert_eq!(state.traps, vec![CASTLE_DRACULA]);
    assert_eq!(state.location(Player::Dracula), Some(CASTLE_DRACULA));
}

#[test]
fn test_illegal_dracula_move_rejected() {
    let mut state = state_with_trail(&[SZEGED]);
    let err = apply_dracula_move(&mut state, Move::Location(HOSPITAL)).unwrap_err();
    assert!(matches!(err, RuleError::IllegalMove { player: Player::Dracula, .. }));
    let err = apply_dracula_move(&mut state, Move::Teleport).unwrap_err();
    assert!(matches!(err, RuleError::IllegalMove { .. }));
}

#[test]
fn test_hunter_springs_traps() {
    let mut state = state_with_trail(&[VARNA]);
    state.traps = vec![KLAUSENBURG, KLAUSENBURG];
    state.player_mut(Player::LordGodalming).location = Some(CASTLE_DRACULA);
    apply_hunter_move(&mut state, Player::LordGodalming, KLAUSENBURG).unwrap();
    assert_eq!(state.health(Player::LordGodalming), HUNTER_MAX_HEALTH - 2 * LIFE_LOSS_TRAP_ENCOUNTER);
    assert!(state.traps.is_empty());
}

#[test]
fn test_incapacitated_hunter_goes_to_hospital_and_recovers() {
    let mut state = state_with_trail(&[VARNA]);
    state.traps = vec![KLAUSENBURG];
    let g = Player::LordGodalming;
    state.player_mut(g).location = Some(CASTLE_DRACULA);
    state.player_mut(g).health = 2;

    apply_hunter_move(&mut state, g, KLAUSENBURG).unwrap();
    assert_eq!(state.health(g), HUNTER_MIN_HEALTH);
    assert_eq!(state.location(g), Some(HOSPITAL));

    apply_hunter_move(&mut state, g, SZEGED).unwrap();
    assert_eq!(state.health(g), HUNTER_MAX_HEALTH);
    assert_eq!(state.location(g), Some(SZEGED));
}

#[test]
fn test_hunter_meets_dracula() {
    let mut state = state_with_trail(&[KLAUSENBURG]);
    let g = Player::LordGodalming;
    state.player_mut(g).location = Some(CASTLE_DRACULA);
    apply_hunter_move(&mut state, g, KLAUSENBURG).unwrap();
    assert_eq!(state.health(g), HUNTER_MAX_HEALTH - LIFE_LOSS_DRACULA_ENCOUNTER);
    assert_eq!(state.health(Player::Dracula), DRACULA_START_BLOOD - LIFE_LOSS_HUNTER_ENCOUNTER);
}

#[test]
fn test_dracula_is_not_a_hunter() {
    let mut state = state_with_trail(&[KLAUSENBURG]);
    let err = apply_hunter_move(&mut state, Player::Dracula, GALATZ).unwrap_err();
    assert_eq!(err, RuleError::NotAHunter(Player::Dracula));
}

#[test]
fn test_no_moves_after_chase_ends() {
    let mut state = state_with_trail(&[KLAUSENBURG]);
    state.winner = Some(Side::Hunters);
    let err = apply_dracula_move(&mut state, Move::Location(GALATZ)).unwrap_err();
    assert_eq!(err, RuleError::GameOver(Side::Hunters));
}

// ═════════════════════════════════════════════════════════════════════════
// SETUP TESTS
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn test_initial_state() {
    let state = create_initial_state();
    assert_eq!(state.round, 0);
    for hunter in Player::HUNTERS {
        assert_eq!(state.health(hunter), HUNTER_MAX_HEALTH);
        assert!(state.location(hunter).is_none());
    }
    assert_eq!(state.health(Player::Dracula), DRACULA_START_BLOOD);
}

#[test]
fn test_random_position_is_seed_deterministic() {
    let a = random_position(7, 12).unwrap();
    let b = random_position(7, 12).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_random_position_keeps_trail_and_traps_consistent() {
    for seed in 0..20 {
        let state = random_position(seed, 15).unwrap();
        assert!(state.trail.len() <= TRAIL_SIZE);
        let laid = state.trail.iter().filter(|e| e.trap).count();
        assert_eq!(state.traps.len(), laid, "seed {}", seed);
        for hunter in Player::HUNTERS {
            assert!(state.location(hunter).is_some());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// VIEW TESTS
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn test_view_reachability_uses_next_round() {
    let mut state = state_with_trail(&[VARNA]);
    for hunter in Player::HUNTERS {
        state.player_mut(hunter).location = Some(BUCHAREST);
    }
    let view = dracula_view(&state);
    for hunter in Player::HUNTERS {
        assert_eq!(
            view.reachable_destinations(hunter),
            navigation::hunter_reachable(BUCHAREST, hunter, state.round + 1),
        );
    }
    assert_eq!(view.reachable_destinations(Player::Dracula), navigation::dracula_destinations(&state));
    assert_eq!(view.location_of(Player::Dracula), Some(VARNA));
}

#[test]
fn test_view_loads_from_json() {
    let state = random_position(3, 5).unwrap();
    let view = dracula_view(&state);
    let json = view.to_json().unwrap();
    let loaded = DraculaView::from_json(&json).unwrap();
    assert_eq!(loaded, view);
}
