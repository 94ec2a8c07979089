// Copyright (C) 2020-2026 Andy Kurnia.

use super::{game_config, tile};

// the caller reports no_moves when it found no legal play for anyone.
pub fn is_game_over(
    game_config: &game_config::GameConfig,
    racks: &[tile::Rack],
    tile_supply_len: usize,
    pass_count: u16,
    no_moves: bool,
) -> bool {
    (tile_supply_len == 0 && racks.iter().any(|rack| rack.is_empty()))
        || pass_count >= racks.len() as u16 * game_config.num_passes_per_player_to_end()
        || no_moves
}

#[inline(always)]
pub fn end_game_penalty(rack: &tile::Rack) -> i16 {
    rack.total_points()
}

// everyone loses what is left on their rack. a sole leader after that also
// collects all the other penalties. returns each player's adjustment.
pub fn apply_end_game_penalties(scores: &mut [i16], racks: &[tile::Rack]) -> Vec<i16> {
    let penalties = racks.iter().map(end_game_penalty).collect::<Vec<_>>();
    let mut adjustments = penalties.iter().map(|&p| -p).collect::<Vec<_>>();
    for (score, adjustment) in scores.iter_mut().zip(&adjustments) {
        *score += adjustment;
    }
    if let Some(&best) = scores.iter().max() {
        let mut leaders = (0..scores.len()).filter(|&i| scores[i] == best);
        if let (Some(leader), None) = (leaders.next(), leaders.next()) {
            let bonus = penalties
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != leader)
                .map(|(_, &p)| p)
                .sum::<i16>();
            scores[leader] += bonus;
            adjustments[leader] += bonus;
        }
    }
    log::debug!("end game adjustments {:?}", adjustments);
    adjustments
}
