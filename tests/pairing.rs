//! Integration tests for Swiss pairing: byes, rematch avoidance, round invariants.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swiss_tournament::logic::played_in;
use swiss_tournament::{
    MatchRecord, MemoryStore, Pairing, PlayerId, Store, Tournament, TournamentError,
};

fn tournament_with_players(n: usize) -> (Tournament<MemoryStore>, Vec<PlayerId>) {
    let mut t = Tournament::new(MemoryStore::new());
    let ids = (0..n)
        .map(|i| t.register_player(&format!("P{i}")).unwrap().id)
        .collect();
    (t, ids)
}

fn ids_of(pairings: &[Pairing]) -> Vec<(PlayerId, PlayerId)> {
    pairings.iter().map(|p| (p.id1, p.id2)).collect()
}

fn byes(t: &Tournament<MemoryStore>) -> Vec<PlayerId> {
    t.store()
        .list_match_history()
        .unwrap()
        .iter()
        .filter(|m| m.is_bye())
        .map(|m| m.winner_id)
        .collect()
}

#[test]
fn no_players_gives_no_pairings() {
    let (mut t, _) = tournament_with_players(0);
    assert!(t.swiss_pairings().unwrap().is_empty());
    assert!(t.store().list_match_history().unwrap().is_empty());
}

#[test]
fn single_player_gets_a_bye() {
    let (mut t, ids) = tournament_with_players(1);
    assert!(t.swiss_pairings().unwrap().is_empty());
    assert_eq!(byes(&t), vec![ids[0]]);
    assert_eq!(t.standings().unwrap()[0].wins, 1);
}

#[test]
fn four_players_first_two_rounds() {
    let (mut t, ids) = tournament_with_players(4);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

    let round_1 = t.swiss_pairings().unwrap();
    assert_eq!(ids_of(&round_1), vec![(a, b), (c, d)]);
    assert!(byes(&t).is_empty());
    let first: (PlayerId, String, PlayerId, String) = round_1[0].clone().into();
    assert_eq!(first, (a, "P0".to_string(), b, "P1".to_string()));

    t.report_match(a, b).unwrap();
    t.report_match(c, d).unwrap();

    let ranked: Vec<PlayerId> = t.standings().unwrap().iter().map(|s| s.id).collect();
    assert_eq!(ranked, vec![a, c, b, d]);

    let round_2 = t.swiss_pairings().unwrap();
    assert_eq!(ids_of(&round_2), vec![(a, c), (b, d)]);
}

#[test]
fn pairing_skips_players_already_met() {
    let (mut t, ids) = tournament_with_players(4);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    t.report_match(a, b).unwrap();
    t.report_match(c, d).unwrap();
    t.report_match(a, c).unwrap();
    t.report_match(b, d).unwrap();

    // A(2) B(1) C(1) D(0): A has met B and C already.
    let round_3 = t.swiss_pairings().unwrap();
    assert_eq!(ids_of(&round_3), vec![(a, d), (b, c)]);
}

#[test]
fn rematch_is_accepted_when_no_one_else_is_left() {
    let (mut t, ids) = tournament_with_players(2);
    t.report_match(ids[0], ids[1]).unwrap();

    let pairs = t.swiss_pairings().unwrap();
    assert_eq!(ids_of(&pairs), vec![(ids[0], ids[1])]);
    assert!(t.is_rematch(ids[1], ids[0]).unwrap());
}

#[test]
fn five_players_bye_goes_to_last_then_moves_on() {
    let (mut t, ids) = tournament_with_players(5);
    let (a, b, c, d, e) = (ids[0], ids[1], ids[2], ids[3], ids[4]);

    let round_1 = t.swiss_pairings().unwrap();
    assert_eq!(ids_of(&round_1), vec![(a, b), (c, d)]);
    assert_eq!(byes(&t), vec![e]);

    t.report_match(a, b).unwrap();
    t.report_match(c, d).unwrap();

    // E is now level with A and C but already had a bye; D is the lowest without one.
    let round_2 = t.swiss_pairings().unwrap();
    assert_eq!(byes(&t), vec![e, d]);
    assert_eq!(ids_of(&round_2), vec![(a, c), (e, b)]);
}

#[test]
fn second_bye_when_everyone_already_had_one() {
    let (mut t, ids) = tournament_with_players(3);
    for &id in &ids {
        t.report_bye(id).unwrap();
    }

    let pairs = t.swiss_pairings().unwrap();
    assert_eq!(ids_of(&pairs), vec![(ids[0], ids[1])]);
    assert_eq!(byes(&t), vec![ids[0], ids[1], ids[2], ids[2]]);
}

#[test]
fn bye_recipient_is_recorded_but_not_paired() {
    let (mut t, _) = tournament_with_players(7);
    let pairs = t.swiss_pairings().unwrap();
    let bye = byes(&t);
    assert_eq!(bye.len(), 1);
    assert!(pairs.iter().all(|p| !p.contains(bye[0])));
}

#[test]
fn play_round_rejects_a_winner_outside_the_pairing() {
    let (mut t, _) = tournament_with_players(2);
    let err = t.play_round(|_| 77).unwrap_err();
    assert!(matches!(
        err,
        TournamentError::InvalidPlayer { id: 77, .. }
    ));
}

#[test]
fn rejected_decision_reports_no_matches() {
    let (mut t, ids) = tournament_with_players(5);
    let mut calls = 0;
    let err = t
        .play_round(|p| {
            calls += 1;
            if calls == 1 {
                p.id1
            } else {
                999
            }
        })
        .unwrap_err();

    assert!(matches!(
        err,
        TournamentError::InvalidPlayer { id: 999, .. }
    ));
    assert_eq!(calls, 2);
    // The bye is recorded while pairing; none of the round's matches are.
    assert_eq!(
        t.store().list_match_history().unwrap(),
        vec![MatchRecord::bye(ids[4])]
    );
    let standings = t.standings().unwrap();
    assert_eq!(standings.iter().map(|s| s.matches_played).sum::<u32>(), 1);
}

/// Walk the pairings in the order they were formed and check that each
/// rematch happened only when the first player had met everyone still unpaired.
fn assert_no_avoidable_rematch(
    history: &[MatchRecord],
    unpaired: &[PlayerId],
    pairings: &[&Pairing],
) {
    let mut left: Vec<PlayerId> = unpaired.to_vec();
    for p in pairings {
        left.retain(|&id| id != p.id1 && id != p.id2);
        if played_in(history, p.id1, p.id2) {
            let fresh: Vec<PlayerId> = left
                .iter()
                .copied()
                .filter(|&id| !played_in(history, p.id1, id))
                .collect();
            assert!(
                fresh.is_empty(),
                "{} rematched {} while {:?} were unplayed",
                p.id1,
                p.id2,
                fresh
            );
        }
    }
}

/// Nine players, nine seeded rounds: every round-level invariant holds.
#[test]
fn seeded_nine_player_tournament_keeps_round_invariants() {
    let (mut t, ids) = tournament_with_players(9);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..9 {
        let history = t.store().list_match_history().unwrap();
        let history_before = history.len();
        let byes_before = byes(&t).len();

        let played = t
            .play_round(|p| if rng.gen_bool(0.5) { p.id1 } else { p.id2 })
            .unwrap();

        assert_eq!(played.len(), 4);
        assert_eq!(byes(&t).len(), byes_before + 1);
        assert_eq!(
            t.store().list_match_history().unwrap().len(),
            history_before + 5
        );

        let mut seen = HashSet::new();
        for m in &played {
            assert!(seen.insert(m.pairing.id1));
            assert!(seen.insert(m.pairing.id2));
        }
        let bye = *byes(&t).last().unwrap();
        assert!(!seen.contains(&bye));
        assert_eq!(seen.len() + 1, ids.len());

        let unpaired: Vec<PlayerId> = ids.iter().copied().filter(|&id| id != bye).collect();
        let pairings: Vec<&Pairing> = played.iter().map(|m| &m.pairing).collect();
        assert_no_avoidable_rematch(&history, &unpaired, &pairings);
    }

    // Nine rounds, nine different bye recipients.
    let distinct: HashSet<PlayerId> = byes(&t).into_iter().collect();
    assert_eq!(distinct.len(), 9);

    // Everyone either played or sat out with a bye in every round.
    let standings = t.standings().unwrap();
    assert!(standings.iter().all(|s| s.matches_played == 9));
    let total_wins: u32 = standings.iter().map(|s| s.wins).sum();
    assert_eq!(total_wins as usize, t.store().list_match_history().unwrap().len());
}

#[test]
fn even_rounds_never_award_byes() {
    let (mut t, _) = tournament_with_players(8);
    for _ in 0..3 {
        let played = t.play_round(|p| p.id1.min(p.id2)).unwrap();
        assert_eq!(played.len(), 4);
    }
    assert!(byes(&t).is_empty());
}
