//! Roadmap Board Controller
//!
//! State container for the roadmap. Owns the canonical feedback list;
//! columns are always re-derived with [`project`]. A drag gesture that
//! lands somewhere new is applied locally first, then handed back to the
//! caller as a [`PersistRequest`] to send upstream.

use std::collections::HashMap;

use log::{debug, info, warn};
use thiserror::Error;

use crate::model::{FeedbackData, FeedbackId, FeedbackItem, Status};
use crate::projection::{project, Columns};
use crate::sync::{FetchTicket, MutationTicket, SyncTracker};

/// A position on the board: column plus index within it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub status: Status,
    pub index: usize,
}

impl Location {
    pub fn new(status: Status, index: usize) -> Self {
        Self { status, index }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging { source: Location },
}

/// The update to send after an optimistic move
#[derive(Debug, Clone, PartialEq)]
pub struct PersistRequest {
    pub ticket: MutationTicket,
    pub id: FeedbackId,
    pub data: FeedbackData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Dropped nowhere, or back where it started
    NoOp,
    Committed(PersistRequest),
}

/// What the caller should do once a persistence request settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// Refresh the authoritative list
    Refetch,
    /// A newer move of the same item is still in flight
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{0} is not a roadmap column")]
    NotARoadmapColumn(Status),
    #[error("no item at index {index} of {status}")]
    SourceOutOfRange { status: Status, index: usize },
    #[error("cannot insert at index {index} of {status} ({len} items)")]
    DestinationOutOfRange { status: Status, index: usize, len: usize },
}

/// State needed to undo an optimistic move
#[derive(Debug, Clone)]
struct PendingMove {
    version: u64,
    previous_status: Status,
    previous_position: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    items: Vec<FeedbackItem>,
    phase: DragPhase,
    sync: SyncTracker,
    pending: HashMap<FeedbackId, PendingMove>,
    last_error: Option<String>,
}

impl Board {
    pub fn new(items: Vec<FeedbackItem>) -> Self {
        Self { items, ..Default::default() }
    }

    /// The canonical flat list
    pub fn items(&self) -> &[FeedbackItem] {
        &self.items
    }

    pub fn columns(&self) -> Columns {
        project(&self.items)
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_syncing(&self, id: &FeedbackId) -> bool {
        self.sync.is_pending(id)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn begin_drag(&mut self, source: Location) {
        debug!("[BOARD] drag start at {:?}", source);
        self.phase = DragPhase::Dragging { source };
    }

    /// Finish a drag gesture.
    ///
    /// On a real move the item is taken out of its source column, its status
    /// is set to the destination column and it is inserted at the destination
    /// index, all before this returns.
    pub fn end_drag(
        &mut self,
        source: Location,
        destination: Option<Location>,
    ) -> Result<DragOutcome, BoardError> {
        self.phase = DragPhase::Idle;

        let Some(destination) = destination else {
            debug!("[BOARD] dropped outside any column");
            return Ok(DragOutcome::NoOp);
        };
        if source == destination {
            return Ok(DragOutcome::NoOp);
        }

        let columns = self.columns();
        let source_column = columns
            .get(source.status)
            .ok_or(BoardError::NotARoadmapColumn(source.status))?;
        let moved_id = source_column
            .items
            .get(source.index)
            .map(|item| item.id.clone())
            .ok_or(BoardError::SourceOutOfRange { status: source.status, index: source.index })?;
        let dest_column = columns
            .get(destination.status)
            .ok_or(BoardError::NotARoadmapColumn(destination.status))?;

        // Destination column as it looks once the moved item is gone
        let remaining: Vec<&FeedbackId> = dest_column
            .items
            .iter()
            .map(|item| &item.id)
            .filter(|id| **id != moved_id)
            .collect();
        if destination.index > remaining.len() {
            return Err(BoardError::DestinationOutOfRange {
                status: destination.status,
                index: destination.index,
                len: remaining.len(),
            });
        }
        let anchor = remaining.get(destination.index).map(|id| (*id).clone());
        let tail = remaining.last().map(|id| (*id).clone());

        let Some(previous_position) = self.position_of(&moved_id) else {
            return Err(BoardError::SourceOutOfRange { status: source.status, index: source.index });
        };
        let mut item = self.items.remove(previous_position);
        let previous_status = item.status;
        item.status = destination.status;

        // Place the item in the flat list so that re-projection puts it at
        // `destination.index`; unrelated items keep their relative order.
        let insert_at = match (anchor, tail) {
            (Some(anchor), _) => self.position_of(&anchor).unwrap_or(self.items.len()),
            (None, Some(tail)) => self.position_of(&tail).map_or(self.items.len(), |p| p + 1),
            (None, None) => self.items.len(),
        };
        let data = FeedbackData::from(&item);
        self.items.insert(insert_at, item);

        let ticket = self.sync.begin_mutation(&moved_id);
        // Only the first in-flight move remembers the original placement
        let pending = self.pending.entry(moved_id.clone()).or_insert(PendingMove {
            version: ticket.version,
            previous_status,
            previous_position,
        });
        pending.version = ticket.version;

        info!(
            "[BOARD] moved {} from {:?} to {:?} (v{})",
            moved_id, source, destination, ticket.version
        );
        Ok(DragOutcome::Committed(PersistRequest { ticket, id: moved_id, data }))
    }

    /// The update for `ticket` was accepted by the server
    pub fn persist_succeeded(&mut self, ticket: &MutationTicket) -> Reconcile {
        if self.sync.settle_mutation(ticket) {
            self.pending.remove(&ticket.id);
            debug!("[BOARD] {} persisted (v{})", ticket.id, ticket.version);
            Reconcile::Refetch
        } else {
            debug!("[BOARD] {} v{} superseded", ticket.id, ticket.version);
            Reconcile::Superseded
        }
    }

    /// The update for `ticket` failed. The latest move of an item is rolled
    /// back to where the item was before its first unconfirmed move.
    pub fn persist_failed(&mut self, ticket: &MutationTicket, message: impl Into<String>) -> Reconcile {
        let message = message.into();
        warn!("[BOARD] persisting {} failed: {}", ticket.id, message);
        self.last_error = Some(message);

        if !self.sync.settle_mutation(ticket) {
            return Reconcile::Superseded;
        }
        if let Some(pending) = self.pending.remove(&ticket.id) {
            if let Some(pos) = self.position_of(&ticket.id) {
                let mut item = self.items.remove(pos);
                item.status = pending.previous_status;
                let at = pending.previous_position.min(self.items.len());
                self.items.insert(at, item);
                info!("[BOARD] reverted {} to {}", ticket.id, pending.previous_status);
            }
        }
        Reconcile::Refetch
    }

    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.sync.begin_fetch()
    }

    /// Replace the canonical list with a server response, unless the
    /// response is older than local state.
    pub fn apply_refresh(&mut self, ticket: FetchTicket, items: Vec<FeedbackItem>) -> bool {
        if !self.sync.accept_fetch(ticket) {
            debug!("[BOARD] discarding stale list (v{})", ticket.version);
            return false;
        }
        debug!("[BOARD] applied list of {} items (v{})", items.len(), ticket.version);
        self.items = items;
        true
    }

    fn position_of(&self, id: &FeedbackId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_item;

    fn column_ids(board: &Board, status: Status) -> Vec<String> {
        board
            .columns()
            .get(status)
            .unwrap()
            .items
            .iter()
            .map(|i| i.id.to_string())
            .collect()
    }

    fn sample_board() -> Board {
        Board::new(vec![
            make_item("p1", Status::Planned),
            make_item("s1", Status::Suggestion),
            make_item("p2", Status::Planned),
            make_item("i1", Status::InProgress),
            make_item("p3", Status::Planned),
            make_item("i2", Status::InProgress),
        ])
    }

    fn committed(outcome: DragOutcome) -> PersistRequest {
        match outcome {
            DragOutcome::Committed(request) => request,
            DragOutcome::NoOp => panic!("expected a committed move"),
        }
    }

    #[test]
    fn test_drop_outside_is_noop() {
        let mut board = sample_board();
        let before = board.items().to_vec();
        board.begin_drag(Location::new(Status::Planned, 0));

        let outcome = board.end_drag(Location::new(Status::Planned, 0), None).unwrap();

        assert_eq!(outcome, DragOutcome::NoOp);
        assert_eq!(board.items(), &before[..]);
        assert_eq!(board.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_drop_at_origin_is_noop() {
        let mut board = sample_board();
        let before = board.items().to_vec();
        let at = Location::new(Status::InProgress, 1);

        let outcome = board.end_drag(at, Some(at)).unwrap();

        assert_eq!(outcome, DragOutcome::NoOp);
        assert_eq!(board.items(), &before[..]);
    }

    #[test]
    fn test_move_between_columns() {
        let mut board = sample_board();
        board.begin_drag(Location::new(Status::Planned, 1));

        let request = committed(
            board
                .end_drag(Location::new(Status::Planned, 1), Some(Location::new(Status::InProgress, 1)))
                .unwrap(),
        );

        assert_eq!(column_ids(&board, Status::Planned), vec!["p1", "p3"]);
        assert_eq!(column_ids(&board, Status::InProgress), vec!["i1", "p2", "i2"]);
        assert_eq!(request.id.as_str(), "p2");
        assert_eq!(request.data.status, Some(Status::InProgress));
        assert!(board.is_syncing(&request.id));
        // Non-roadmap items are untouched
        assert!(board.items().iter().any(|i| i.id.as_str() == "s1" && i.status == Status::Suggestion));
    }

    #[test]
    fn test_move_to_end_and_into_empty_column() {
        let mut board = sample_board();

        board
            .end_drag(Location::new(Status::InProgress, 0), Some(Location::new(Status::Live, 0)))
            .unwrap();
        board
            .end_drag(Location::new(Status::Planned, 0), Some(Location::new(Status::Live, 1)))
            .unwrap();

        assert_eq!(column_ids(&board, Status::Live), vec!["i1", "p1"]);
        assert_eq!(column_ids(&board, Status::InProgress), vec!["i2"]);
        assert_eq!(column_ids(&board, Status::Planned), vec!["p2", "p3"]);
    }

    #[test]
    fn test_reorder_within_column() {
        let mut board = sample_board();

        board
            .end_drag(Location::new(Status::Planned, 0), Some(Location::new(Status::Planned, 2)))
            .unwrap();
        assert_eq!(column_ids(&board, Status::Planned), vec!["p2", "p3", "p1"]);

        board
            .end_drag(Location::new(Status::Planned, 2), Some(Location::new(Status::Planned, 0)))
            .unwrap();
        assert_eq!(column_ids(&board, Status::Planned), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_out_of_range_locations_are_rejected() {
        let mut board = sample_board();
        let before = board.items().to_vec();

        let err = board
            .end_drag(Location::new(Status::Live, 0), Some(Location::new(Status::Planned, 0)))
            .unwrap_err();
        assert_eq!(err, BoardError::SourceOutOfRange { status: Status::Live, index: 0 });

        let err = board
            .end_drag(Location::new(Status::Planned, 0), Some(Location::new(Status::InProgress, 5)))
            .unwrap_err();
        assert!(matches!(err, BoardError::DestinationOutOfRange { len: 2, .. }));

        let err = board
            .end_drag(Location::new(Status::Planned, 0), Some(Location::new(Status::Suggestion, 0)))
            .unwrap_err();
        assert_eq!(err, BoardError::NotARoadmapColumn(Status::Suggestion));
        assert_eq!(board.items(), &before[..]);
    }

    #[test]
    fn test_failed_persist_reverts_move() {
        let mut board = sample_board();
        let before = board.items().to_vec();
        let request = committed(
            board
                .end_drag(Location::new(Status::Planned, 2), Some(Location::new(Status::Live, 0)))
                .unwrap(),
        );

        let reconcile = board.persist_failed(&request.ticket, "Network Error");

        assert_eq!(reconcile, Reconcile::Refetch);
        assert_eq!(board.items(), &before[..]);
        assert_eq!(board.last_error(), Some("Network Error"));
        assert!(!board.is_syncing(&request.id));
    }

    #[test]
    fn test_superseded_failure_keeps_newer_move() {
        let mut board = sample_board();
        let first = committed(
            board
                .end_drag(Location::new(Status::Planned, 0), Some(Location::new(Status::Live, 0)))
                .unwrap(),
        );
        let second = committed(
            board
                .end_drag(Location::new(Status::Live, 0), Some(Location::new(Status::InProgress, 0)))
                .unwrap(),
        );

        assert_eq!(board.persist_failed(&first.ticket, "timeout"), Reconcile::Superseded);
        assert_eq!(column_ids(&board, Status::InProgress), vec!["p1", "i1", "i2"]);

        // Reverting the latest move restores the pre-drag placement
        assert_eq!(board.persist_failed(&second.ticket, "timeout"), Reconcile::Refetch);
        assert_eq!(column_ids(&board, Status::Planned), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_success_then_refresh() {
        let mut board = sample_board();
        let request = committed(
            board
                .end_drag(Location::new(Status::Planned, 0), Some(Location::new(Status::Live, 0)))
                .unwrap(),
        );

        // A list fetched while the update is in flight is discarded
        let early = board.begin_refresh();
        assert!(!board.apply_refresh(early, Vec::new()));
        assert_eq!(column_ids(&board, Status::Live), vec!["p1"]);

        assert_eq!(board.persist_succeeded(&request.ticket), Reconcile::Refetch);
        assert_eq!(board.persist_succeeded(&request.ticket), Reconcile::Superseded);

        let fetch = board.begin_refresh();
        let server = vec![make_item("p1", Status::Live)];
        assert!(board.apply_refresh(fetch, server));
        assert_eq!(board.items().len(), 1);
    }

    #[test]
    fn test_replayed_list_from_before_a_move_is_discarded() {
        let mut board = Board::default();
        let initial = board.begin_refresh();
        let before_move = sample_board().items().to_vec();
        assert!(board.apply_refresh(initial, before_move.clone()));

        let request = committed(
            board
                .end_drag(Location::new(Status::Planned, 0), Some(Location::new(Status::Live, 0)))
                .unwrap(),
        );
        assert_eq!(board.persist_succeeded(&request.ticket), Reconcile::Refetch);

        // Serving the cached pre-move list again must not undo the move
        assert!(!board.apply_refresh(initial, before_move));
        assert_eq!(column_ids(&board, Status::Live), vec!["p1"]);
    }
}
