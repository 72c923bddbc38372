// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Randomizer view state management.
//!
//! This module tracks the lifecycle of a spin: idle, spinning (cycling
//! decorative covers while the pick is in flight), and presenting a picked
//! record with its backdrop stack and tracklist. The tracklist arrives
//! separately from the pick, so a presented record may briefly have no
//! tracklist at all.

mod render;

use crate::model::{CatalogEntry, tracklist::SplitTracklist};

pub(crate) enum SpinPhase {
    Idle,
    Spinning {
        covers: Vec<CatalogEntry>,
        frame: usize,
    },
    Presented(Box<PresentedRecord>),
}

pub(crate) struct PresentedRecord {
    pub(crate) entry: CatalogEntry,
    pub(crate) backdrop: Vec<CatalogEntry>,
    pub(crate) tracklist: Option<SplitTracklist>,
    pub(crate) flipped: bool,
    pub(crate) playing: bool,
    pub(crate) frame: usize,
}

pub(crate) struct RandomizerView {
    pub(crate) phase: SpinPhase,
    pub(crate) is_active: bool,
}

impl RandomizerView {
    pub(crate) fn new() -> Self {
        Self {
            phase: SpinPhase::Idle,
            is_active: false,
        }
    }

    /// Enters the spinning phase with a fresh decorative sample of covers.
    pub(crate) fn begin_spin(&mut self, covers: Vec<CatalogEntry>) {
        self.phase = SpinPhase::Spinning { covers, frame: 0 };
    }

    /// Presents the primary pick, replacing whatever phase was current.
    pub(crate) fn present_record(&mut self, entry: CatalogEntry, backdrop: Vec<CatalogEntry>) {
        self.phase = SpinPhase::Presented(Box::new(PresentedRecord {
            entry,
            backdrop,
            tracklist: None,
            flipped: false,
            playing: false,
            frame: 0,
        }));
    }

    /// Attaches the partitioned tracklist to the presented record. Ignored
    /// outside the presented phase, which can happen when a new spin started
    /// while the tracklist fetch was still in flight.
    pub(crate) fn set_tracklist(&mut self, tracklist: SplitTracklist) {
        if let SpinPhase::Presented(record) = &mut self.phase {
            record.tracklist = Some(tracklist);
        }
    }

    pub(crate) fn reset(&mut self) {
        self.phase = SpinPhase::Idle;
    }

    /// Stops the spin animation when a spin fails. A record that is already
    /// presented stays on the platter.
    pub(crate) fn cancel_spin(&mut self) {
        if matches!(self.phase, SpinPhase::Spinning { .. }) {
            self.phase = SpinPhase::Idle;
        }
    }

    pub(crate) fn toggle_flip(&mut self) {
        if let SpinPhase::Presented(record) = &mut self.phase {
            record.flipped = !record.flipped;
        }
    }

    pub(crate) fn toggle_playing(&mut self) {
        if let SpinPhase::Presented(record) = &mut self.phase {
            record.playing = !record.playing;
        }
    }

    /// Advances the animation one frame. Driven by the application tick.
    pub(crate) fn advance_animation(&mut self) {
        match &mut self.phase {
            SpinPhase::Spinning { frame, .. } => *frame = frame.wrapping_add(1),
            SpinPhase::Presented(record) if record.playing => {
                record.frame = record.frame.wrapping_add(1);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tracklist::{SplitTracklist, Track};

    fn entry(id: u64) -> CatalogEntry {
        CatalogEntry {
            id,
            title: format!("Record {id}"),
            artists: vec![],
            cover_image: None,
            year: None,
        }
    }

    #[test]
    fn spin_to_presented_lifecycle() {
        let mut view = RandomizerView::new();

        view.begin_spin(vec![entry(1), entry(2)]);
        assert!(matches!(view.phase, SpinPhase::Spinning { .. }));

        view.present_record(entry(3), vec![entry(1)]);
        let SpinPhase::Presented(record) = &view.phase else {
            panic!("expected a presented record");
        };
        assert_eq!(record.entry.id, 3);
        assert!(record.tracklist.is_none());
    }

    #[test]
    fn tracklist_attaches_only_to_a_presented_record() {
        let mut view = RandomizerView::new();
        let split = SplitTracklist {
            side_a: vec![Track {
                position: "1".into(),
                title: "A".into(),
            }],
            side_b: vec![],
        };

        view.set_tracklist(split.clone());
        assert!(matches!(view.phase, SpinPhase::Idle));

        view.present_record(entry(1), vec![]);
        view.set_tracklist(split);

        let SpinPhase::Presented(record) = &view.phase else {
            panic!("expected a presented record");
        };
        assert_eq!(record.tracklist.as_ref().map(|t| t.side_a.len()), Some(1));
    }

    #[test]
    fn ticks_only_animate_spinning_or_playing() {
        let mut view = RandomizerView::new();

        view.advance_animation();
        assert!(matches!(view.phase, SpinPhase::Idle));

        view.begin_spin(vec![entry(1)]);
        view.advance_animation();
        let SpinPhase::Spinning { frame, .. } = view.phase else {
            panic!("expected spinning");
        };
        assert_eq!(frame, 1);

        view.present_record(entry(2), vec![]);
        view.advance_animation();
        view.toggle_playing();
        view.advance_animation();

        let SpinPhase::Presented(record) = &view.phase else {
            panic!("expected a presented record");
        };
        assert_eq!(record.frame, 1);
    }
}
