//! Ratio-locked dimension editing.
//!
//! [`ResizeEngine`] holds one editing session: the committed size last
//! persisted by the host, the local size mirroring what the user is typing,
//! the lock flag, and the step pair of the loaded image. Typing only touches
//! the local size; [`ResizeEngine::commit`] snaps it and writes it back.
//!
//! # Example
//!
//! ```
//! use zenratio::{Dimension, Field, ResizeEngine};
//!
//! let mut engine = ResizeEngine::new();
//! engine.initialize(Dimension::new(1920, 1080), None).unwrap();
//!
//! engine.set_local_field(Field::Width, "1000");
//! // Snapped to 63 × (16, 9).
//! assert_eq!(engine.commit().unwrap(), Dimension::new(1008, 567));
//! assert_eq!(engine.committed(), Dimension::new(1008, 567));
//! ```

use log::{debug, trace};

use crate::dimension::{Dimension, Field, parse_typed};
use crate::error::ResizeError;
use crate::step::{GcdStep, StepCalculator, StepPair};

/// Mutable state of one editing session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResizeState {
    /// Last size persisted to the host document.
    pub committed: Dimension,
    /// Size reflecting in-progress input. Equal to `committed` when clean.
    pub local: Dimension,
    /// Whether edits snap to multiples of `step`.
    pub is_locked: bool,
    /// `None` until an image has loaded.
    pub step: Option<StepPair>,
}

impl Default for ResizeState {
    fn default() -> Self {
        Self {
            committed: Dimension::default(),
            local: Dimension::default(),
            is_locked: true,
            step: None,
        }
    }
}

/// Ratio-locked dimension editor for a single image.
///
/// Generic over its [`StepCalculator`] so the step source can be replaced
/// in tests; [`ResizeEngine::new`] uses [`GcdStep`].
#[derive(Clone, Debug)]
pub struct ResizeEngine<C = GcdStep> {
    calculator: C,
    initially_locked: bool,
    state: ResizeState,
}

impl ResizeEngine<GcdStep> {
    /// Create an empty engine using gcd step reduction.
    pub fn new() -> Self {
        Self::with_calculator(GcdStep)
    }
}

impl Default for ResizeEngine<GcdStep> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: StepCalculator> ResizeEngine<C> {
    /// Create an empty engine with a custom step calculator.
    pub fn with_calculator(calculator: C) -> Self {
        Self {
            calculator,
            initially_locked: true,
            state: ResizeState::default(),
        }
    }

    /// Lock state applied by every [`initialize`](Self::initialize). Default `true`.
    pub fn initially_locked(mut self, locked: bool) -> Self {
        self.initially_locked = locked;
        self.state.is_locked = locked;
        self
    }

    /// Load an image's natural size, replacing all previous state.
    ///
    /// `override_dims` seeds the committed size when the host already has
    /// stored dimensions for this image; an override with a zero axis is
    /// ignored. The step pair always comes from `natural`.
    pub fn initialize(
        &mut self,
        natural: Dimension,
        override_dims: Option<Dimension>,
    ) -> Result<(), ResizeError> {
        let step = self.calculator.step(natural)?;
        let start = override_dims.filter(|d| !d.is_empty()).unwrap_or(natural);
        self.state = ResizeState {
            committed: start,
            local: start,
            is_locked: self.initially_locked,
            step: Some(step),
        };
        debug!("resize session initialized: natural {natural}, start {start}, step {step:?}");
        Ok(())
    }

    /// Enable ratio snapping.
    pub fn lock(&mut self) {
        self.state.is_locked = true;
    }

    /// Disable ratio snapping; commits pass the typed size through.
    pub fn unlock(&mut self) {
        self.state.is_locked = false;
    }

    /// Set the lock explicitly.
    pub fn set_locked(&mut self, locked: bool) {
        self.state.is_locked = locked;
    }

    /// Flip the lock and return the new value.
    pub fn toggle_lock(&mut self) -> bool {
        self.state.is_locked = !self.state.is_locked;
        self.state.is_locked
    }

    /// Record a keystroke into one local field.
    ///
    /// Input that does not parse as a non-negative integer leaves the field
    /// at its previous value. Returns the field's value afterwards.
    pub fn set_local_field(&mut self, field: Field, raw: &str) -> u32 {
        match parse_typed(raw) {
            Some(v) => self.state.local.set(field, v),
            None => trace!("ignoring unparseable {field} input {raw:?}"),
        }
        self.state.local.get(field)
    }

    /// Record a keystroke into the width field.
    pub fn set_width(&mut self, raw: &str) -> u32 {
        self.set_local_field(Field::Width, raw)
    }

    /// Record a keystroke into the height field.
    pub fn set_height(&mut self, raw: &str) -> u32 {
        self.set_local_field(Field::Height, raw)
    }

    /// Compute the size the current local input commits to, without mutating.
    ///
    /// Calling this repeatedly without new input returns the same value.
    pub fn resolve(&self) -> Result<Dimension, ResizeError> {
        let step = self.state.step.ok_or(ResizeError::NotInitialized)?;
        Ok(valid_dimensions(
            self.state.committed,
            self.state.local,
            self.state.is_locked,
            step,
        ))
    }

    /// Resolve and store the result as both committed and local size.
    pub fn commit(&mut self) -> Result<Dimension, ResizeError> {
        let resolved = self.resolve()?;
        if resolved != self.state.committed {
            debug!(
                "committed {} -> {resolved} (typed {})",
                self.state.committed, self.state.local
            );
        }
        self.state.committed = resolved;
        self.state.local = resolved;
        Ok(resolved)
    }

    /// Drop the loaded image; the engine returns to its pre-load state.
    pub fn reset(&mut self) {
        self.state = ResizeState {
            is_locked: self.initially_locked,
            ..ResizeState::default()
        };
    }

    /// Last committed size.
    pub fn committed(&self) -> Dimension {
        self.state.committed
    }

    /// Size currently shown in the inputs.
    pub fn local(&self) -> Dimension {
        self.state.local
    }

    /// Step pair of the loaded image, `None` before load.
    pub fn step(&self) -> Option<StepPair> {
        self.state.step
    }

    /// Whether commits snap to the step ratio.
    pub fn is_locked(&self) -> bool {
        self.state.is_locked
    }

    /// Whether an image has been loaded.
    pub fn is_initialized(&self) -> bool {
        self.state.step.is_some()
    }

    /// Whether local input differs from the committed size.
    pub fn is_dirty(&self) -> bool {
        self.state.local != self.state.committed
    }

    /// Full session state.
    pub fn state(&self) -> &ResizeState {
        &self.state
    }
}

/// Snap a typed size to the next valid ratio-locked size.
///
/// Stateless core of [`ResizeEngine::resolve`]:
///
/// 1. Unlocked, or nothing changed: `local` as-is.
/// 2. The changed axis is width if it differs, otherwise height.
/// 3. Shrinking an axis already at one step returns `committed`.
/// 4. The changed axis snaps to the nearest multiple of its step (at least
///    one). If that is the multiple `committed` already sits on, it moves one
///    more step in the edit direction so a commit never stalls.
/// 5. The other axis is derived from the step ratio, never from its own
///    typed value.
pub fn valid_dimensions(
    committed: Dimension,
    local: Dimension,
    is_locked: bool,
    step: StepPair,
) -> Dimension {
    if !is_locked || local == committed {
        return local;
    }

    let changed = if local.width != committed.width {
        Field::Width
    } else {
        Field::Height
    };
    let other = changed.other();
    let typed = local.get(changed);
    let current = committed.get(changed);
    let unit = step.get(changed);
    let growing = typed > current;

    if !growing && current == unit {
        trace!("{changed} already at one step ({unit}), not shrinking");
        return committed;
    }

    // Round half up: floor((2·typed + unit) / (2·unit)).
    let nearest = (2 * u64::from(typed) + u64::from(unit)) / (2 * u64::from(unit));
    let mut iter = nearest.max(1);
    if current % unit == 0 && iter == u64::from(current / unit) {
        iter = if growing { iter + 1 } else { iter - 1 };
        trace!("{changed} {typed} rounds back to current multiple, moving to {iter}");
    }

    let changed_px = saturate(iter * u64::from(unit));
    // iter · step[changed] · step[other] / step[changed], exact in integers.
    let other_px = saturate(iter * u64::from(step.get(other)));
    trace!("snapped {changed} {typed} -> {changed_px} (x{iter}), {other} -> {other_px}");

    Dimension::new(0, 0)
        .with(changed, changed_px)
        .with(other, other_px)
}

fn saturate(v: u64) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}
