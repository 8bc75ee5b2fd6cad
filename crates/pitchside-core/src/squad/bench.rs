// Bench priority and captaincy.

use std::cmp::Ordering;

use crate::player::Player;

/// Selected players not in the starting lineup, in substitution priority.
///
/// Benched goalkeepers always go last. Everyone else is ordered by projected
/// points, highest first; ties keep selection order.
pub fn order_bench(selected: &[Player], starting: &[Player]) -> Vec<Player> {
    let mut bench: Vec<Player> = selected
        .iter()
        .filter(|p| !starting.iter().any(|s| s.id == p.id))
        .cloned()
        .collect();
    bench.sort_by(|a, b| {
        a.position
            .is_goalkeeper()
            .cmp(&b.position.is_goalkeeper())
            .then_with(|| {
                b.projected_points
                    .partial_cmp(&a.projected_points)
                    .unwrap_or(Ordering::Equal)
            })
    });
    bench
}

/// Index of the first player holding the strictly highest projected points,
/// skipping `exclude`.
fn first_max(players: &[Player], exclude: Option<usize>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, player) in players.iter().enumerate() {
        if Some(i) == exclude {
            continue;
        }
        match best {
            Some(b) if player.projected_points <= players[b].projected_points => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Captain and vice-captain from the starting lineup.
///
/// Both are picked by a linear scan keeping the first strict maximum of
/// projected points; the vice scan skips the captain. Either is `None` only
/// when the lineup has too few players.
pub fn pick_captains(starting: &[Player]) -> (Option<Player>, Option<Player>) {
    let captain = first_max(starting, None);
    let vice = captain.and_then(|c| first_max(starting, Some(c)));
    (
        captain.map(|i| starting[i].clone()),
        vice.map(|i| starting[i].clone()),
    )
}
