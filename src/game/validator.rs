//! Move validation and scoring.
//!
//! [`validate_and_score`] is a pure function of the board, the rack and the dictionary:
//! it never mutates anything, so a rejected move needs no cleanup and calling it twice
//! gives the same answer. Wildcard designations live only in the returned
//! [`ValidatedMove`] and reach the board through [`commit`].

use std::iter;

use serde::Serialize;

use super::{Board, Rack, ScoreCard};
use crate::{
    dictionary::Dictionary,
    error::{CommitError, RejectReason},
    models::{Direction, Position, Tile},
};

/// One tile leaving the rack for the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Rack slot the tile comes from
    pub slot: usize,
    /// The tile as it will sit on the board; wildcards carry their designated letter
    pub tile: Tile,
    pub position: Position,
}

/// A legal move, ready to be committed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedMove {
    pub word: String,
    pub start: Position,
    pub direction: Direction,
    pub placements: Vec<Placement>,
    /// Perpendicular words formed by the new tiles, in placement order
    pub cross_words: Vec<String>,
    pub score: u32,
}

/// Decide whether `word`, laid from `start` along `direction`, is legal for the holder
/// of `rack`, and score it.
///
/// Checks run in a fixed order and the first failure wins: bounds, dictionary,
/// extension, then each square from the start of the word to its end, then
/// connectivity.
pub fn validate_and_score(
    word: &str,
    start: Position,
    direction: Direction,
    board: &Board,
    rack: &Rack,
    dictionary: &Dictionary,
) -> Result<ValidatedMove, RejectReason> {
    let result = evaluate(word, start, direction, board, rack, dictionary);

    match &result {
        Ok(validated) => tracing::debug!(
            "{} at {} ({:?}) is worth {} points",
            validated.word,
            start,
            direction,
            validated.score
        ),
        Err(reason) => tracing::debug!("Rejected {} at {}: {}", word, start, reason),
    }

    result
}

fn evaluate(
    word: &str,
    start: Position,
    direction: Direction,
    board: &Board,
    rack: &Rack,
    dictionary: &Dictionary,
) -> Result<ValidatedMove, RejectReason> {
    let word = word.trim().to_uppercase();
    let letters: Vec<char> = word.chars().collect();

    if !start.in_bounds() {
        return Err(RejectReason::OutOfBounds { word, start });
    }
    let end = letters
        .len()
        .checked_sub(1)
        .map(|last| start.offset(direction, last));
    if end.is_some_and(|end| !end.in_bounds()) {
        return Err(RejectReason::OutOfBounds { word, start });
    }

    let Some(end) = end.filter(|_| dictionary.contains(&word)) else {
        return Err(RejectReason::WordNotInDictionary { word });
    };

    // The word must be given in full: nothing may touch either end along its axis
    let outside = [start.before(direction), end.after(direction)];
    if let Some(neighbour) = outside
        .into_iter()
        .flatten()
        .find(|pos| board.is_occupied(*pos))
    {
        return Err(RejectReason::IncompleteWordSpan { word, neighbour });
    }

    let cross = direction.perpendicular();
    let mut card = ScoreCard::new();
    let mut placements: Vec<Placement> = Vec::with_capacity(letters.len());
    let mut cross_words = Vec::new();
    let mut connected = false;

    for (offset, &letter) in letters.iter().enumerate() {
        let position = start.offset(direction, offset);
        let Some(square) = board.square(position) else {
            return Err(RejectReason::OutOfBounds { word, start });
        };

        if position == Position::CENTER {
            connected = true;
        }

        if let Some(existing) = square.tile() {
            if existing.letter() != letter {
                return Err(RejectReason::LetterConflict {
                    position,
                    expected: letter,
                    found: existing.letter(),
                });
            }
            card.add_existing(existing);
            connected = true;
            continue;
        }

        let taken: Vec<usize> = placements.iter().map(|p| p.slot).collect();
        let Some((slot, tile)) = rack
            .find_slot(letter, &taken)
            .and_then(|slot| rack.get(slot).map(|tile| (slot, tile.designate(letter))))
        else {
            return Err(RejectReason::MissingLetter { position, letter });
        };

        let before = board.tiles_before(position, cross);
        let after = board.tiles_after(position, cross);
        if !before.is_empty() || !after.is_empty() {
            let cross_word: String = before
                .iter()
                .map(|t| t.letter())
                .chain(iter::once(letter))
                .chain(after.iter().map(|t| t.letter()))
                .collect();
            if !dictionary.contains(&cross_word) {
                return Err(RejectReason::InvalidCrossWord {
                    position,
                    cross_word,
                });
            }

            let neighbours = before.iter().chain(after.iter()).map(|t| t.value()).sum();
            card.add_cross_word(neighbours, tile.value(), square);
            cross_words.push(cross_word);
            connected = true;
        }

        card.add_new(tile.value(), square);
        placements.push(Placement {
            slot,
            tile,
            position,
        });
    }

    if !connected {
        return Err(RejectReason::Disconnected { word });
    }
    if placements.is_empty() {
        return Err(RejectReason::NoTilesPlaced { word });
    }

    Ok(ValidatedMove {
        word,
        start,
        direction,
        placements,
        cross_words,
        score: card.total(),
    })
}

/// Apply a validated move: tiles go onto the board and leave the rack.
///
/// The move is checked against the current board and rack first; if any target square
/// has been filled or any rack slot no longer holds the expected tile, nothing changes.
pub fn commit(
    validated: &ValidatedMove,
    board: &mut Board,
    rack: &mut Rack,
) -> Result<u32, CommitError> {
    for (i, placement) in validated.placements.iter().enumerate() {
        if board.square(placement.position).is_none() || board.is_occupied(placement.position) {
            return Err(CommitError::StaleMove(format!(
                "square {} is not free",
                placement.position
            )));
        }

        let in_rack = rack
            .get(placement.slot)
            .map(|tile| tile.designate(placement.tile.letter()));
        if in_rack != Some(placement.tile) {
            return Err(CommitError::StaleMove(format!(
                "rack slot {} does not hold {}",
                placement.slot, placement.tile
            )));
        }

        let duplicate = validated.placements[..i]
            .iter()
            .any(|p| p.slot == placement.slot || p.position == placement.position);
        if duplicate {
            return Err(CommitError::StaleMove(format!(
                "slot {} or square {} used twice",
                placement.slot, placement.position
            )));
        }
    }

    apply(validated, board, rack);
    Ok(validated.score)
}

/// Commit without re-checking. Only for moves validated against this exact board and rack.
pub(crate) fn apply(validated: &ValidatedMove, board: &mut Board, rack: &mut Rack) {
    // Only tiles that reached the board leave the rack
    let slots: Vec<usize> = validated
        .placements
        .iter()
        .filter(|placement| board.place(placement.position, placement.tile))
        .map(|placement| placement.slot)
        .collect();
    if slots.len() != validated.placements.len() {
        tracing::warn!(
            "{} of {} tiles for {} found their square taken",
            validated.placements.len() - slots.len(),
            validated.placements.len(),
            validated.word
        );
    }
    rack.remove_slots(&slots);

    tracing::info!(
        "Placed {} at {} for {} points ({} tiles)",
        validated.word,
        validated.start,
        validated.score,
        slots.len()
    );
}
