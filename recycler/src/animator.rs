use alloc::vec::Vec;

/// What an item animation is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationKind {
    /// Fade in a newly inserted row.
    Add,
    /// Fade out a removed row.
    Remove,
    /// Translate a shifted row from its previous position.
    Move { from: usize },
    /// Cross-fade a rebound row.
    Change,
}

/// One running item animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAnimation {
    pub kind: AnimationKind,
    pub position: usize,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl ItemAnimation {
    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms.max(1) as f32).clamp(0.0, 1.0);
        self.easing.sample(t)
    }

    /// Opacity of the row at `now_ms`.
    pub fn alpha(&self, now_ms: u64) -> f32 {
        let p = self.progress(now_ms);
        match self.kind {
            AnimationKind::Remove => 1.0 - p,
            AnimationKind::Add => p,
            AnimationKind::Move { .. } | AnimationKind::Change => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// Receives row lifecycle events from the surface and drives their animations.
///
/// The structural hooks run before the animations of the same notification are started, so
/// running animations can be moved to the rows' new positions.
pub trait ItemAnimator {
    fn animate_add(&mut self, position: usize, now_ms: u64);
    fn animate_remove(&mut self, position: usize, now_ms: u64);
    fn animate_move(&mut self, from: usize, to: usize, now_ms: u64);
    fn animate_change(&mut self, position: usize, now_ms: u64);

    fn on_items_inserted(&mut self, start: usize, count: usize) {
        let _ = (start, count);
    }

    fn on_items_removed(&mut self, start: usize, count: usize) {
        let _ = (start, count);
    }

    fn on_data_set_changed(&mut self) {}

    /// Drops finished animations.
    fn advance(&mut self, now_ms: u64);

    fn is_running(&self) -> bool;

    fn running(&self) -> &[ItemAnimation];
}

/// Fades for add/remove, translations for moves and cross-fades for changes.
#[derive(Clone, Debug)]
pub struct DefaultItemAnimator {
    pub add_duration_ms: u64,
    pub remove_duration_ms: u64,
    pub move_duration_ms: u64,
    pub change_duration_ms: u64,
    pub easing: Easing,
    running: Vec<ItemAnimation>,
}

impl Default for DefaultItemAnimator {
    fn default() -> Self {
        Self {
            add_duration_ms: 120,
            remove_duration_ms: 120,
            move_duration_ms: 250,
            change_duration_ms: 250,
            easing: Easing::default(),
            running: Vec::new(),
        }
    }
}

impl DefaultItemAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_durations(mut self, add_remove_ms: u64, move_change_ms: u64) -> Self {
        self.add_duration_ms = add_remove_ms;
        self.remove_duration_ms = add_remove_ms;
        self.move_duration_ms = move_change_ms;
        self.change_duration_ms = move_change_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The animation currently affecting `position`, latest first.
    pub fn animation_at(&self, position: usize) -> Option<&ItemAnimation> {
        self.running.iter().rev().find(|a| a.position == position)
    }

    fn start(&mut self, kind: AnimationKind, position: usize, now_ms: u64, duration_ms: u64) {
        // A row runs at most one animation of each kind; the newer one wins.
        self.running.retain(|a| {
            a.position != position
                || core::mem::discriminant(&a.kind) != core::mem::discriminant(&kind)
        });
        self.running.push(ItemAnimation {
            kind,
            position,
            start_ms: now_ms,
            duration_ms,
            easing: self.easing,
        });
    }
}

impl ItemAnimator for DefaultItemAnimator {
    fn animate_add(&mut self, position: usize, now_ms: u64) {
        self.start(AnimationKind::Add, position, now_ms, self.add_duration_ms);
    }

    fn animate_remove(&mut self, position: usize, now_ms: u64) {
        self.start(AnimationKind::Remove, position, now_ms, self.remove_duration_ms);
    }

    fn animate_move(&mut self, from: usize, to: usize, now_ms: u64) {
        self.start(AnimationKind::Move { from }, to, now_ms, self.move_duration_ms);
    }

    fn animate_change(&mut self, position: usize, now_ms: u64) {
        self.start(AnimationKind::Change, position, now_ms, self.change_duration_ms);
    }

    // Remove animations stay where the row was when it disappeared.
    fn on_items_inserted(&mut self, start: usize, count: usize) {
        for a in &mut self.running {
            if a.kind != AnimationKind::Remove && a.position >= start {
                a.position += count;
            }
        }
    }

    fn on_items_removed(&mut self, start: usize, count: usize) {
        let end = start.saturating_add(count);
        self.running.retain_mut(|a| {
            if a.kind == AnimationKind::Remove || a.position < start {
                return true;
            }
            if a.position < end {
                return false;
            }
            a.position -= count;
            true
        });
    }

    fn on_data_set_changed(&mut self) {
        self.running.clear();
    }

    fn advance(&mut self, now_ms: u64) {
        self.running.retain(|a| !a.is_done(now_ms));
    }

    fn is_running(&self) -> bool {
        !self.running.is_empty()
    }

    fn running(&self) -> &[ItemAnimation] {
        &self.running
    }
}
