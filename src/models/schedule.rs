use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::time::{MAX_MINUTE, Minutes};

/// Hard cap on a single drive block, enforced while editing.
pub const MAX_DRIVE_MINS: u16 = 120;

/// Floor for a break block; reflow never shrinks a break below this.
pub const MIN_BREAK_MINS: u16 = 10;

/// Validation messages keyed by block index, in block order.
pub type BlockErrors = BTreeMap<usize, String>;

const ERR_END_BEFORE_START: &str = "End time must be after start time";
const ERR_DRIVE_TOO_LONG: &str = "Drive blocks cannot exceed 120 minutes";
const ERR_BREAK_TOO_SHORT: &str = "Break duration must be at least 10 minutes";
const ERR_OVERLAP: &str = "Blocks cannot overlap";
const ERR_INVALID_TIME: &str = "Invalid time data";

/// A suggested stop near a break block's window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NearbyStop {
    pub name: String,
    pub dist_km: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Drive,
    Break,
}

/// One entry of a daily plan: a drive window with an earnings estimate, or a
/// break window with suggested stops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Drive {
        #[serde(with = "crate::utils::time::hhmm")]
        start: Minutes,
        #[serde(with = "crate::utils::time::hhmm")]
        end: Minutes,
        reason: String,
        est_eph: f64,
    },
    Break {
        #[serde(with = "crate::utils::time::hhmm")]
        start: Minutes,
        #[serde(with = "crate::utils::time::hhmm")]
        end: Minutes,
        #[serde(default)]
        nearby: Vec<NearbyStop>,
    },
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Drive { .. } => BlockKind::Drive,
            Self::Break { .. } => BlockKind::Break,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Self::Break { .. })
    }

    pub fn start(&self) -> Minutes {
        match self {
            Self::Drive { start, .. } | Self::Break { start, .. } => *start,
        }
    }

    pub fn end(&self) -> Minutes {
        match self {
            Self::Drive { end, .. } | Self::Break { end, .. } => *end,
        }
    }

    pub fn set_start(&mut self, value: Minutes) {
        match self {
            Self::Drive { start, .. } | Self::Break { start, .. } => *start = value,
        }
    }

    pub fn set_end(&mut self, value: Minutes) {
        match self {
            Self::Drive { end, .. } | Self::Break { end, .. } => *end = value,
        }
    }

    /// Signed duration in minutes; negative only for degenerate data.
    pub fn duration(&self) -> i32 {
        i32::from(self.end()) - i32::from(self.start())
    }

    pub fn label(&self) -> &'static str {
        match self.kind() {
            BlockKind::Drive => "Drive",
            BlockKind::Break => "Break",
        }
    }
}

/// A day of drive and break blocks, sorted by start time.
///
/// Invariants (for plans produced by this module): adjacent blocks satisfy
/// `end[i] <= start[i + 1]` and every block has `end > start`. Externally
/// generated plans are trusted on load; `validate` flags violations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchedulePlan {
    pub day: NaiveDate,
    pub blocks: Vec<Block>,
}

impl SchedulePlan {
    /// Demo plan used when the driver has no accepted schedule yet: a dinner
    /// pre-peak drive, a short break, and the dinner-peak drive.
    pub fn demo(day: NaiveDate) -> Self {
        Self {
            day,
            blocks: vec![
                Block::Drive {
                    start: 16 * 60,
                    end: 18 * 60,
                    reason: "dinner pre-peak".to_string(),
                    est_eph: 24.5,
                },
                Block::Break {
                    start: 18 * 60,
                    end: 18 * 60 + 15,
                    nearby: vec![
                        NearbyStop {
                            name: "Cafe Azul".to_string(),
                            dist_km: 0.6,
                        },
                        NearbyStop {
                            name: "P+R Centrum".to_string(),
                            dist_km: 0.9,
                        },
                    ],
                },
                Block::Drive {
                    start: 18 * 60 + 15,
                    end: 20 * 60 + 10,
                    reason: "dinner peak".to_string(),
                    est_eph: 29.1,
                },
            ],
        }
    }

    pub fn first_start(&self) -> Option<Minutes> {
        self.blocks.first().map(Block::start)
    }

    /// Index of the block the clock is currently inside, or the first block
    /// when the plan has not started yet.
    pub fn current_block_index(&self, now: Minutes) -> Option<usize> {
        if let Some(i) = self
            .blocks
            .iter()
            .position(|b| now >= b.start() && now < b.end())
        {
            return Some(i);
        }
        match self.first_start() {
            Some(first) if now < first => Some(0),
            _ => None,
        }
    }

    /// Full-plan validation: per index, degenerate times win over overlap,
    /// overlap wins over duration limits.
    pub fn validate(&self) -> BlockErrors {
        let mut errors = BlockErrors::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if block.end() <= block.start() || block.end() > MAX_MINUTE {
                errors.insert(i, ERR_INVALID_TIME.to_string());
                continue;
            }
            if let Some(next) = self.blocks.get(i + 1)
                && block.end() > next.start()
            {
                errors.insert(i, ERR_OVERLAP.to_string());
                continue;
            }
            match block.kind() {
                BlockKind::Drive if block.duration() > i32::from(MAX_DRIVE_MINS) => {
                    errors.insert(i, ERR_DRIVE_TOO_LONG.to_string());
                }
                BlockKind::Break if block.duration() < i32::from(MIN_BREAK_MINS) => {
                    errors.insert(i, ERR_BREAK_TOO_SHORT.to_string());
                }
                _ => {}
            }
        }
        errors
    }
}

/// The boundaries being typed for one block, not yet applied.
#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    index: usize,
    start: Option<Minutes>,
    end: Option<Minutes>,
    error: Option<String>,
}

impl EditSession {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn start(&self) -> Option<Minutes> {
        self.start
    }

    pub fn end(&self) -> Option<Minutes> {
        self.end
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Working-copy editor for a daily schedule plan.
///
/// A session runs from `load_plan` until `accept` or `close`. Edits only
/// touch the working copy; the last accepted plan is replaced by `accept`
/// and restored by `close`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ScheduleEditor {
    accepted: Option<SchedulePlan>,
    working: Option<SchedulePlan>,
    edit: Option<EditSession>,
    reflowed: BTreeSet<usize>,
    errors: BlockErrors,
}

impl ScheduleEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an editing session on a deep copy of `plan`. Any in-progress
    /// edit and reflow markers are cleared. The upstream plan is trusted
    /// here; violations surface on edit, change, or accept.
    pub fn load_plan(&mut self, plan: SchedulePlan) {
        self.working = Some(plan);
        self.edit = None;
        self.reflowed.clear();
        self.errors.clear();
    }

    /// True while an editing session is open.
    pub fn is_open(&self) -> bool {
        self.working.is_some()
    }

    pub fn working_plan(&self) -> Option<&SchedulePlan> {
        self.working.as_ref()
    }

    pub fn accepted_plan(&self) -> Option<&SchedulePlan> {
        self.accepted.as_ref()
    }

    pub fn edit(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn plan_errors(&self) -> &BlockErrors {
        &self.errors
    }

    pub fn is_reflowed(&self, index: usize) -> bool {
        self.reflowed.contains(&index)
    }

    /// True when the working copy has diverged from the accepted plan.
    pub fn has_local_changes(&self) -> bool {
        match (&self.working, &self.accepted) {
            (Some(working), Some(accepted)) => working != accepted,
            (Some(_), None) => true,
            _ => false,
        }
    }

    /// Enters edit mode for one block, seeding the editable boundaries from
    /// its current values. Validation runs immediately so pre-existing bad
    /// data surfaces before the first keystroke.
    pub fn begin_edit(&mut self, index: usize) {
        let Some(block) = self.working.as_ref().and_then(|p| p.blocks.get(index)) else {
            return;
        };
        let start = Some(block.start());
        let end = Some(block.end());
        self.edit = Some(EditSession {
            index,
            start,
            end,
            error: Self::validate_interval(start, end, block.kind()),
        });
    }

    pub fn set_edit_start(&mut self, start: Option<Minutes>) {
        self.update_edit(|edit| edit.start = start);
    }

    pub fn set_edit_end(&mut self, end: Option<Minutes>) {
        self.update_edit(|edit| edit.end = end);
    }

    fn update_edit(&mut self, apply: impl FnOnce(&mut EditSession)) {
        let kind = match (&self.edit, &self.working) {
            (Some(edit), Some(plan)) => match plan.blocks.get(edit.index) {
                Some(block) => block.kind(),
                None => return,
            },
            _ => return,
        };
        if let Some(edit) = self.edit.as_mut() {
            apply(edit);
            edit.error = Self::validate_interval(edit.start, edit.end, kind);
        }
    }

    /// Per-edit validation, first failure wins. An incomplete edit (either
    /// boundary missing) is not an error, just not yet submittable.
    pub fn validate_interval(
        start: Option<Minutes>,
        end: Option<Minutes>,
        kind: BlockKind,
    ) -> Option<String> {
        let (start, end) = (start?, end?);
        if end <= start {
            return Some(ERR_END_BEFORE_START.to_string());
        }
        let duration = end - start;
        match kind {
            BlockKind::Drive if duration > MAX_DRIVE_MINS => {
                Some(ERR_DRIVE_TOO_LONG.to_string())
            }
            BlockKind::Break if duration < MIN_BREAK_MINS => {
                Some(ERR_BREAK_TOO_SHORT.to_string())
            }
            _ => None,
        }
    }

    /// Applies the in-progress edit to the working copy. A no-op while the
    /// edit is invalid or incomplete. Editing a drive block reflows its
    /// break neighbors; the index after the edited block is marked as
    /// reflowed for the UI. Returns whether the edit was applied.
    pub fn commit_edit(&mut self) -> bool {
        let Some(edit) = self.edit.clone() else {
            return false;
        };
        if edit.error.is_some() {
            return false;
        }
        let (Some(start), Some(end)) = (edit.start, edit.end) else {
            return false;
        };
        let Some(plan) = self.working.as_mut() else {
            return false;
        };
        let Some(block) = plan.blocks.get_mut(edit.index) else {
            return false;
        };

        block.set_start(start);
        block.set_end(end);
        let edited_drive = !block.is_break();
        if edited_drive {
            reflow_neighbors(&mut plan.blocks, edit.index);
        }
        if edit.index + 1 < plan.blocks.len() {
            self.reflowed.insert(edit.index + 1);
        }
        self.errors = plan.validate();
        self.edit = None;
        true
    }

    /// Discards the in-progress edit without touching the working copy.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Removes a break block from the working copy. Drive blocks are not
    /// independently removable. Returns whether a block was removed.
    pub fn remove_block(&mut self, index: usize) -> bool {
        let Some(plan) = self.working.as_mut() else {
            return false;
        };
        if !plan.blocks.get(index).is_some_and(Block::is_break) {
            return false;
        }
        plan.blocks.remove(index);
        let reflowed = std::mem::take(&mut self.reflowed);
        self.reflowed = reflowed
            .into_iter()
            .filter(|&i| i != index)
            .map(|i| if i > index { i - 1 } else { i })
            .collect();
        if let Some(edit) = &self.edit
            && edit.index >= index
        {
            self.edit = None;
        }
        self.errors = plan.validate();
        true
    }

    /// Commits the working copy as the new accepted plan. Rejects, leaving
    /// the previously accepted plan untouched, if full-plan validation flags
    /// any block.
    pub fn accept(&mut self) -> Result<(), BlockErrors> {
        let Some(plan) = self.working.as_ref() else {
            return Err(BlockErrors::new());
        };
        let errors = plan.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.accepted = self.working.take();
        self.edit = None;
        self.reflowed.clear();
        self.errors.clear();
        Ok(())
    }

    /// Ends the session, discarding the working copy and reverting to the
    /// last accepted plan.
    pub fn close(&mut self) {
        self.working = None;
        self.edit = None;
        self.reflowed.clear();
        self.errors.clear();
    }

    /// Drops the accepted plan entirely and ends any open session.
    pub fn clear_accepted(&mut self) {
        self.accepted = None;
        self.close();
    }
}

/// Pins the break neighbors of an edited drive block flush against its new
/// boundaries. One hop on each side only; reflow does not cascade.
fn reflow_neighbors(blocks: &mut [Block], index: usize) {
    // Break after the edited drive block.
    if index + 1 < blocks.len() && blocks[index + 1].is_break() {
        let drive_end = blocks[index].end();
        blocks[index + 1].set_start(drive_end);
        let floor = drive_end + MIN_BREAK_MINS;
        if index + 2 < blocks.len() {
            let next_start = blocks[index + 2].start();
            if next_start >= floor {
                // Break absorbs the whole gap up to the next block.
                blocks[index + 1].set_end(next_start);
            } else {
                // Break takes its minimum; the next block's start slides.
                blocks[index + 2].set_start(floor);
                blocks[index + 1].set_end(floor);
            }
        } else if blocks[index + 1].end() < floor {
            blocks[index + 1].set_end(floor);
        }
    }

    // Break before the edited drive block.
    if index > 0 && blocks[index - 1].is_break() {
        let drive_start = blocks[index].start();
        blocks[index - 1].set_end(drive_start);
        if blocks[index - 1].duration() < i32::from(MIN_BREAK_MINS) {
            let new_start = drive_start.saturating_sub(MIN_BREAK_MINS);
            blocks[index - 1].set_start(new_start);
            if index >= 2 {
                blocks[index - 2].set_end(new_start);
            }
        }
    }
}
