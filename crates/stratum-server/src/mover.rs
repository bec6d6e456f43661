#![forbid(unsafe_code)]

//! Region moves: scrolling a rectangle of a window's contents by an offset.
//!
//! A move copies whatever pixels it can and asks the window to repaint the
//! rest. Three things make it more than a single blit:
//!
//! 1. **Occlusion of the destination.** Parts of the destination covered by
//!    higher windows belong to those windows and are left alone.
//! 2. **Occlusion of the source.** A source pixel hidden under a higher
//!    window holds that window's content, not ours, so the matching
//!    destination pixel is scheduled for redraw instead of copied.
//! 3. **Overlap.** Source and destination usually overlap. Each piece is
//!    blitted overlap-safely by the plane, but pieces must also be issued in
//!    an order where no piece overwrites pixels a later piece still has to
//!    read. [`ClipOrder::from_offset`] picks that order and both clipping
//!    passes honor it.
//!
//! # Passes
//!
//! The destination is `rect + offset`, kept inside the window. Its visible
//! parts are found by clipping against the windows above. For each such
//! piece, the part whose source lies outside the window or off screen is
//! redrawn, and the rest is mapped back to its source, which is clipped
//! against the same windows again: visible source pieces become blits,
//! obscured ones become redraws at their destination.
//!
//! The passes record a [`MovePlan`] once; the plan is then replayed on every
//! display plane, so multi-plane servers do the clipping a single time.

use smallvec::SmallVec;
use stratum_core::geometry::{Point, Rect};
use stratum_core::id::WindowId;
use stratum_render::plane::PlaneBlit;
use stratum_render::redraw::RedrawSink;

use crate::clip::{ClipOrder, ClipVisitor, clip};
use crate::config::MoverConfig;
use crate::error::ServerError;
use crate::window::{Window, WindowStack, ZChain};

/// One step of a region move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOp {
    /// Copy `dest - offset` to `dest` on every plane.
    Blit { dest: Rect, offset: Point },
    /// Ask the window to repaint this screen rectangle.
    Redraw(Rect),
}

/// The ordered outcome of clipping one region move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    window: WindowId,
    order: ClipOrder,
    ops: SmallVec<[MoveOp; 8]>,
}

impl MovePlan {
    fn new(window: WindowId, order: ClipOrder) -> Self {
        Self {
            window,
            order,
            ops: SmallVec::new(),
        }
    }

    /// The window whose region moves.
    #[inline]
    pub fn window(&self) -> WindowId {
        self.window
    }

    /// Traversal order used for both clipping passes.
    #[inline]
    pub fn order(&self) -> ClipOrder {
        self.order
    }

    /// Every op in issue order.
    #[inline]
    pub fn ops(&self) -> &[MoveOp] {
        &self.ops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Blits in issue order, as `(dest, offset)`.
    pub fn blits(&self) -> impl Iterator<Item = (Rect, Point)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            MoveOp::Blit { dest, offset } => Some((dest, offset)),
            MoveOp::Redraw(_) => None,
        })
    }

    /// Redraw rectangles in issue order.
    pub fn redraws(&self) -> impl Iterator<Item = Rect> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            MoveOp::Redraw(rect) => Some(rect),
            MoveOp::Blit { .. } => None,
        })
    }

    /// Replay the blits on each plane in order, then forward the redraws.
    pub fn apply<P: PlaneBlit, R: RedrawSink + ?Sized>(&self, planes: &mut [P], sink: &mut R) {
        for plane in planes.iter_mut() {
            for (dest, offset) in self.blits() {
                plane.move_rect(dest, offset);
            }
        }
        for rect in self.redraws() {
            sink.request(self.window, rect);
        }
    }
}

/// Everything the clipping callbacks of one move share. Lives on the stack
/// of a single `plan_move_ordered` call.
struct MoveContext<'a> {
    above: ZChain<'a>,
    offset: Point,
    /// Window bounds clipped to the background: where valid source pixels live.
    src_bound: Rect,
    background: Rect,
    order: ClipOrder,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Clipping the destination; obscured pieces belong to other windows.
    Destination,
    /// Clipping the source of one visible destination piece.
    Source,
}

struct MoveVisitor<'p, 'a> {
    phase: Phase,
    ctx: &'p MoveContext<'a>,
    plan: &'p mut MovePlan,
}

impl MoveVisitor<'_, '_> {
    fn destination(&mut self, rect: Rect) {
        let ctx = self.ctx;

        // Destination pixels whose source is outside the valid area. A zero
        // offset leaves every pixel where it is and exposes nothing.
        let reachable = ctx
            .src_bound
            .translate(ctx.offset)
            .intersection(&ctx.background);
        if !ctx.offset.is_zero() {
            for exposed in rect.nonintersecting(&reachable) {
                if !exposed.is_empty() {
                    self.redraw(exposed);
                }
            }
        }

        let src = rect
            .intersection(&reachable)
            .translate(-ctx.offset)
            .intersection(&ctx.src_bound);
        if src.is_empty() {
            return;
        }

        let mut source = MoveVisitor {
            phase: Phase::Source,
            ctx,
            plan: &mut *self.plan,
        };
        clip(ctx.above, src, ctx.order, &mut source);
    }

    fn source(&mut self, rect: Rect) {
        let offset = self.ctx.offset;
        if offset.is_zero() {
            return;
        }
        let dest = rect.translate(offset);
        #[cfg(feature = "tracing")]
        tracing::trace!(window = %self.plan.window, %dest, "region move blit");
        self.plan.ops.push(MoveOp::Blit { dest, offset });
    }

    fn obscured_source(&mut self, rect: Rect) {
        self.redraw(rect.translate(self.ctx.offset));
    }

    fn redraw(&mut self, rect: Rect) {
        #[cfg(feature = "tracing")]
        tracing::trace!(window = %self.plan.window, %rect, "region move redraw");
        self.plan.ops.push(MoveOp::Redraw(rect));
    }
}

impl ClipVisitor for MoveVisitor<'_, '_> {
    fn visible(&mut self, rect: Rect) {
        match self.phase {
            Phase::Destination => self.destination(rect),
            Phase::Source => self.source(rect),
        }
    }

    fn obscured(&mut self, rect: Rect) {
        match self.phase {
            Phase::Destination => {}
            Phase::Source => self.obscured_source(rect),
        }
    }
}

fn lookup(stack: &WindowStack, window: WindowId) -> Result<(&Window, ZChain<'_>), ServerError> {
    Ok((stack.window(window)?, stack.above(window)?))
}

/// Executes region moves against a [`WindowStack`].
#[derive(Debug, Clone, Default)]
pub struct RegionMover {
    config: MoverConfig,
}

impl RegionMover {
    pub fn new(config: MoverConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &MoverConfig {
        &self.config
    }

    /// Move the pixels of `rect` (window-local) by `offset` on every plane,
    /// sending the areas that cannot be copied to `sink`.
    ///
    /// Empty rectangles and zero offsets are accepted and do nothing.
    pub fn move_region<P: PlaneBlit, R: RedrawSink + ?Sized>(
        &self,
        stack: &WindowStack,
        window: WindowId,
        rect: Rect,
        offset: Point,
        planes: &mut [P],
        sink: &mut R,
    ) -> Result<(), ServerError> {
        if planes.len() > self.config.max_planes {
            return Err(ServerError::PlaneLimit {
                requested: planes.len(),
                limit: self.config.max_planes,
            });
        }
        let plan = self.plan_move(stack, window, rect, offset)?;
        plan.apply(planes, sink);
        Ok(())
    }

    /// Clip a move without touching any plane.
    pub fn plan_move(
        &self,
        stack: &WindowStack,
        window: WindowId,
        rect: Rect,
        offset: Point,
    ) -> Result<MovePlan, ServerError> {
        self.plan_move_ordered(stack, window, rect, offset, ClipOrder::from_offset(offset))
    }

    /// [`plan_move`](Self::plan_move) with the traversal order forced.
    ///
    /// Any order other than [`ClipOrder::from_offset`] may read pixels after
    /// they were overwritten when source and destination overlap.
    pub fn plan_move_ordered(
        &self,
        stack: &WindowStack,
        window: WindowId,
        rect: Rect,
        offset: Point,
        order: ClipOrder,
    ) -> Result<MovePlan, ServerError> {
        let (wnd, above) = lookup(stack, window).inspect_err(|_| {
            #[cfg(feature = "tracing")]
            tracing::warn!(%window, "region move rejected: unknown window");
        })?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "region_move",
            window = %window,
            rect = %rect,
            dx = offset.x,
            dy = offset.y,
            order = ?order
        )
        .entered();

        let mut plan = MovePlan::new(window, order);
        if !wnd.is_visible() || (offset.is_zero() && self.config.skip_zero_offset) {
            return Ok(plan);
        }

        let dest = wnd.to_screen(rect).translate(offset).intersection(&wnd.bounds);
        if dest.is_empty() {
            return Ok(plan);
        }
        let background = stack.background();
        let src_bound = wnd.bounds.intersection(&background);

        let ctx = MoveContext {
            above,
            offset,
            src_bound,
            background,
            order,
        };
        let mut visitor = MoveVisitor {
            phase: Phase::Destination,
            ctx: &ctx,
            plan: &mut plan,
        };
        clip(above, dest, order, &mut visitor);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            blits = plan.blits().count(),
            redraws = plan.redraws().count(),
            "region move planned"
        );
        Ok(plan)
    }
}
